use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

/// Cooperative cancellation flag shared between a caller and in-flight
/// batch workers. Workers check it before starting each unit of work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Fixed-size worker pool for CPU-bound batch evaluation.
///
/// One unit of work per item is dispatched into the pool; the pool size
/// caps concurrency no matter how large the batch is.
pub struct BatchPool {
    pool: ThreadPool,
}

impl BatchPool {
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .build()?;
        Ok(Self { pool })
    }

    /// Pool sized to the number of available execution units.
    pub fn with_default_workers() -> Result<Self, ThreadPoolBuildError> {
        Self::new(default_workers())
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Result of a batch run. `results[i]` corresponds to `items[i]`; a
/// `None` slot was never evaluated (cancelled before its turn) and must
/// not be read as a zero score.
#[derive(Debug)]
pub struct BatchOutcome<R> {
    pub results: Vec<Option<R>>,
    pub processed: usize,
    pub skipped: usize,
}

impl<R> BatchOutcome<R> {
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Apply `worker` to every item on the bounded pool, preserving the
/// input-order correspondence between items and result slots.
///
/// Blocks until every dispatched unit has either run or been skipped;
/// there is no fire-and-forget mode. Each worker writes only its own
/// output slot, so the result sequence needs no locking; the shared
/// counters are atomics.
pub fn batch_map<T, R, W>(
    pool: &BatchPool,
    items: &[T],
    cancel: &CancelToken,
    worker: W,
) -> BatchOutcome<R>
where
    T: Sync,
    R: Send,
    W: Fn(&T) -> R + Sync,
{
    let processed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);

    let results: Vec<Option<R>> = pool.pool.install(|| {
        items
            .par_iter()
            .map(|item| {
                if cancel.is_cancelled() {
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return None;
                }

                let output = worker(item);
                processed.fetch_add(1, Ordering::Relaxed);
                Some(output)
            })
            .collect()
    });

    let processed = processed.into_inner();
    let skipped = skipped.into_inner();

    debug!(
        items = items.len(),
        processed,
        skipped,
        workers = pool.workers(),
        "batch evaluation finished"
    );

    BatchOutcome {
        results,
        processed,
        skipped,
    }
}

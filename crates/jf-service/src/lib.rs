use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use jf_core::api::{BatchMatchItem, BatchMatchResponse, MatchResponse};
use jf_core::catalog::JobCatalog;
use jf_core::matching::scoring::{MatchConfig, Matcher};
use jf_core::parallel::{BatchPool, CancelToken};
use jf_core::recommend::{recommend, Recommendation, RecommendConfig};
use jf_core::search::{search, SearchConfig, SearchPage, SearchRequest};
use jf_core::{JobRecord, Profile};

pub mod sample;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("worker pool: {0}")]
    Pool(String),
}

/// Everything the service reads from the environment, in one place.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub matching: MatchConfig,
    pub search: SearchConfig,
    pub recommend: RecommendConfig,
    /// Worker count for batch scoring; `None` sizes the pool to the
    /// available execution units.
    pub workers: Option<usize>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            matching: MatchConfig::from_env(),
            search: SearchConfig::from_env(),
            recommend: RecommendConfig::from_env(),
            workers: std::env::var("JF_WORKERS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}

/// Facade over the matching core: the four call shapes a transport
/// layer would expose. Holds an injected read-only catalog and never
/// writes through it.
pub struct MatchService {
    catalog: Arc<dyn JobCatalog>,
    matcher: Matcher,
    pool: BatchPool,
    config: ServiceConfig,
}

impl MatchService {
    pub fn new(catalog: Arc<dyn JobCatalog>) -> Result<Self, ServiceError> {
        Self::with_config(catalog, ServiceConfig::default())
    }

    pub fn with_config(
        catalog: Arc<dyn JobCatalog>,
        config: ServiceConfig,
    ) -> Result<Self, ServiceError> {
        let pool = match config.workers {
            Some(workers) => BatchPool::new(workers),
            None => BatchPool::with_default_workers(),
        }
        .map_err(|err| ServiceError::Pool(err.to_string()))?;

        Ok(Self {
            matcher: Matcher::new(config.matching.clone()),
            catalog,
            pool,
            config,
        })
    }

    /// Filtered, faceted, paginated view of the catalog. Out-of-range
    /// paging values clamp; this call never fails.
    pub fn search(&self, request: &SearchRequest) -> SearchPage {
        let jobs = self.catalog.list_all();
        let page = search(&jobs, request, &self.config.search);

        info!(
            catalog = jobs.len(),
            total = page.total,
            page = page.page,
            "search served"
        );

        page
    }

    /// Score a single posting for a profile.
    pub fn match_one(&self, profile: &Profile, job_id: &str) -> Result<MatchResponse, ServiceError> {
        let job = self
            .catalog
            .find_by_id(job_id)
            .ok_or_else(|| ServiceError::JobNotFound(job_id.to_string()))?;

        Ok(MatchResponse::from(&self.matcher.score(profile, &job)))
    }

    /// Score a list of job ids. Unknown ids are counted, not fatal;
    /// cancellation returns the already-computed prefix of results with
    /// `completed = false`.
    pub fn batch_match(
        &self,
        profile: &Profile,
        job_ids: &[String],
        cancel: &CancelToken,
    ) -> BatchMatchResponse {
        let mut resolved: Vec<JobRecord> = Vec::with_capacity(job_ids.len());
        let mut failed_count = 0usize;

        for id in job_ids {
            match self.catalog.find_by_id(id) {
                Some(job) => resolved.push(job),
                None => {
                    warn!(job_id = %id, "batch match skipping unknown job id");
                    failed_count += 1;
                }
            }
        }

        let outcome = self
            .matcher
            .score_batch(&self.pool, profile, &resolved, cancel);
        let completed = outcome.is_complete();
        let processed_count = outcome.processed;

        let matches: Vec<BatchMatchItem> = outcome
            .results
            .into_iter()
            .flatten()
            .map(|report| BatchMatchItem {
                job_id: report.job_id.clone(),
                score: report.score,
                details: MatchResponse::from(&report),
            })
            .collect();

        info!(
            requested = job_ids.len(),
            processed = processed_count,
            failed = failed_count,
            completed,
            "batch match finished"
        );

        BatchMatchResponse {
            matches,
            processed_count,
            failed_count,
            completed,
        }
    }

    /// Top recommendations for a profile, excluding ids the caller has
    /// already seen. The response size is capped by configuration no
    /// matter what `limit` is requested.
    pub fn recommend(
        &self,
        profile: &Profile,
        exclude_ids: &[String],
        limit: usize,
    ) -> Vec<Recommendation> {
        let exclude: HashSet<String> = exclude_ids.iter().cloned().collect();
        let candidates = self.catalog.list_all();

        recommend(
            &self.matcher,
            &self.pool,
            &self.config.recommend,
            profile,
            &candidates,
            &exclude,
            limit,
            &CancelToken::new(),
        )
    }
}

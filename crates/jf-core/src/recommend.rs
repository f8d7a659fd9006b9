use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scoring::{MatchReport, Matcher};
use crate::parallel::{BatchPool, CancelToken};
use crate::{JobRecord, Profile};

/// Recommendations returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;
/// Hard ceiling on a single recommendation response, regardless of what
/// the caller requests.
pub const MAX_RECOMMENDATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_RECOMMENDATION_LIMIT,
            max_limit: MAX_RECOMMENDATIONS,
        }
    }
}

impl RecommendConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_limit: env_usize("JF_RECOMMEND_DEFAULT_LIMIT")
                .unwrap_or(defaults.default_limit),
            max_limit: env_usize("JF_RECOMMEND_MAX_LIMIT").unwrap_or(defaults.max_limit),
        }
    }

    /// `min(requested if > 0 else default, ceiling)`.
    pub fn effective_limit(&self, requested: usize) -> usize {
        let base = if requested == 0 {
            self.default_limit
        } else {
            requested
        };
        base.min(self.max_limit)
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job: JobRecord,
    pub match_score: f64,
    pub reason: String,
}

/// Score the candidate postings for the profile and return the best ones.
///
/// Excluded ids are dropped before scoring so no work is spent on
/// postings the caller already ruled out. Slots left unevaluated by a
/// cancellation are dropped, never ranked as zero.
pub fn recommend(
    matcher: &Matcher,
    pool: &BatchPool,
    config: &RecommendConfig,
    profile: &Profile,
    candidates: &[JobRecord],
    exclude_ids: &HashSet<String>,
    requested_limit: usize,
    cancel: &CancelToken,
) -> Vec<Recommendation> {
    let eligible: Vec<JobRecord> = candidates
        .iter()
        .filter(|job| !exclude_ids.contains(&job.id))
        .cloned()
        .collect();

    let outcome = matcher.score_batch(pool, profile, &eligible, cancel);

    let mut scored: Vec<(JobRecord, MatchReport)> = eligible
        .into_iter()
        .zip(outcome.results)
        .filter_map(|(job, slot)| slot.map(|report| (job, report)))
        .collect();

    scored.sort_by(|a, b| b.1.score.partial_cmp(&a.1.score).unwrap_or(Ordering::Equal));

    let limit = config.effective_limit(requested_limit);
    scored.truncate(limit);

    debug!(
        candidates = candidates.len(),
        excluded = exclude_ids.len(),
        returned = scored.len(),
        limit,
        "built recommendations"
    );

    scored
        .into_iter()
        .map(|(job, report)| Recommendation {
            reason: format!(
                "This job has a {:.0}% match based on your skills and experience.",
                report.score
            ),
            match_score: report.score,
            job,
        })
        .collect()
}

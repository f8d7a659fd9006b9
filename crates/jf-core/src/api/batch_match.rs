use serde::{Deserialize, Serialize};

use super::match_response::MatchResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMatchItem {
    pub job_id: String,
    pub score: f64,
    pub details: MatchResponse,
}

/// Aggregate result of matching one profile against a list of job ids.
///
/// Ids that resolve to no catalog entry count into `failed_count`
/// instead of aborting the batch; `completed` is false when a
/// cancellation left some resolved jobs unevaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMatchResponse {
    pub matches: Vec<BatchMatchItem>,
    pub processed_count: usize,
    pub failed_count: usize,
    pub completed: bool,
}

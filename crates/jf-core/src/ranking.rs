use std::cmp::Ordering;

use crate::matching::scoring::MatchReport;

/// Sort reports by overall score, highest first. `sort_by` is stable,
/// so equal scores keep their input order across repeated runs.
pub fn rank(mut reports: Vec<MatchReport>) -> Vec<MatchReport> {
    reports.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    reports
}

/// Truncate a ranked list to its best `k` entries. `k == 0` disables
/// truncation and returns the whole list.
pub fn top_k(mut ranked: Vec<MatchReport>, k: usize) -> Vec<MatchReport> {
    if k > 0 && k < ranked.len() {
        ranked.truncate(k);
    }
    ranked
}

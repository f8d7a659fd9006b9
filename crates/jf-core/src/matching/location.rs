use super::NEUTRAL_SCORE;

/// Score the posting location against the profile's target locations.
///
/// Remote postings satisfy every target. A posting whose location
/// contains any target is a full match; anything else earns `fallback`
/// (the configured allowance for relocation or undeclared remote work).
pub fn score_location(target_locations: &[String], job_location: &str, fallback: f64) -> f64 {
    let location = job_location.to_lowercase();

    if location.contains("remote") {
        return 100.0;
    }

    let targets: Vec<String> = target_locations
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    if targets.is_empty() {
        return NEUTRAL_SCORE;
    }

    if targets.iter().any(|target| location.contains(target)) {
        100.0
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn containment_matches() {
        assert_eq!(
            score_location(&targets(&["San Francisco"]), "San Francisco, CA", 30.0),
            100.0
        );
        assert_eq!(
            score_location(&targets(&["seattle"]), "Seattle, WA", 30.0),
            100.0
        );
    }

    #[test]
    fn remote_postings_match_any_target() {
        assert_eq!(score_location(&targets(&["New York"]), "Remote", 30.0), 100.0);
        assert_eq!(score_location(&[], "Remote (US)", 0.0), 100.0);
    }

    #[test]
    fn non_match_earns_fallback() {
        assert_eq!(
            score_location(&targets(&["New York"]), "Mountain View, CA", 30.0),
            30.0
        );
        assert_eq!(
            score_location(&targets(&["New York"]), "Mountain View, CA", 0.0),
            0.0
        );
    }

    #[test]
    fn no_targets_scores_neutral() {
        assert_eq!(score_location(&[], "Seattle, WA", 30.0), NEUTRAL_SCORE);
    }
}

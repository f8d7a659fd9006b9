use std::sync::LazyLock;

use regex::Regex;

use super::NEUTRAL_SCORE;

// Posting requirements are free text ("3-5 years", "5+ years of software
// development experience"), so these are sentinel-substring checks, not a
// parsed numeric range comparison.
static FIVE_PLUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[5-9]|[1-9]\d)\s*\+").unwrap());

static MID_BAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[2-4]\s*(?:-|–|~|to)\s*[2-9]|[2-4]\s*\+").unwrap());

/// Requirement signals five or more years ("5+", "8+", "10+").
pub fn requires_five_plus(requirement: &str) -> bool {
    FIVE_PLUS_RE.is_match(requirement)
}

/// Requirement signals a 2-5 year band ("3-5 years", "2-4", "3+").
pub fn requires_mid_band(requirement: &str) -> bool {
    MID_BAND_RE.is_match(requirement)
}

/// Grade the profile's years against a free-text requirement.
///
/// 100 for seasoned profiles on senior postings, 90 for mid-band fits,
/// 70 for any profile with at least a year, and a neutral 50 otherwise.
pub fn score_experience(profile_years: u32, requirement: &str) -> f64 {
    if profile_years >= 5 && requires_five_plus(requirement) {
        100.0
    } else if profile_years >= 3 && requires_mid_band(requirement) {
        90.0
    } else if profile_years >= 1 {
        70.0
    } else {
        NEUTRAL_SCORE
    }
}

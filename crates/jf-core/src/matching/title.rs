use super::NEUTRAL_SCORE;

/// Role vocabulary shared between profile titles and posting titles.
const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "architect",
    "manager",
    "analyst",
    "designer",
    "scientist",
    "lead",
    "senior",
    "junior",
];

const KEYWORD_POINTS: f64 = 20.0;

/// Score how close the posting title is to any of the profile's target
/// roles. Containment either direction is a full match; otherwise each
/// role keyword the two titles share is worth `KEYWORD_POINTS`.
pub fn score_title(target_roles: &[String], job_title: &str) -> f64 {
    if target_roles.iter().all(|role| role.trim().is_empty()) {
        return NEUTRAL_SCORE;
    }

    let title = job_title.to_lowercase();
    let mut best: f64 = 0.0;

    for role in target_roles {
        let role = role.trim().to_lowercase();
        if role.is_empty() {
            continue;
        }

        if title.contains(&role) || role.contains(&title) {
            return 100.0;
        }

        let shared = ROLE_KEYWORDS
            .iter()
            .filter(|keyword| role.contains(**keyword) && title.contains(**keyword))
            .count();
        best = best.max((shared as f64 * KEYWORD_POINTS).min(100.0));
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn containment_is_a_full_match() {
        assert_eq!(
            score_title(&roles(&["Backend Engineer"]), "Senior Backend Engineer"),
            100.0
        );
        assert_eq!(
            score_title(&roles(&["Senior Software Engineer"]), "Software Engineer"),
            100.0
        );
    }

    #[test]
    fn shared_keywords_earn_partial_credit() {
        // "engineer" is the only shared keyword.
        assert_eq!(
            score_title(&roles(&["Data Engineer"]), "Platform Engineer"),
            20.0
        );
        // "senior" and "engineer" both appear.
        assert_eq!(
            score_title(&roles(&["Senior ML Engineer"]), "Senior Cloud Engineer"),
            40.0
        );
    }

    #[test]
    fn unrelated_titles_score_zero() {
        assert_eq!(score_title(&roles(&["Accountant"]), "Platform Engineer"), 0.0);
    }

    #[test]
    fn no_target_roles_scores_neutral() {
        assert_eq!(score_title(&[], "Platform Engineer"), NEUTRAL_SCORE);
        assert_eq!(score_title(&roles(&["  "]), "Platform Engineer"), NEUTRAL_SCORE);
    }

    #[test]
    fn best_role_wins() {
        let targets = roles(&["Product Designer", "Frontend Developer"]);
        assert_eq!(score_title(&targets, "Frontend Developer"), 100.0);
    }
}

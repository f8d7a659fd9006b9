use std::collections::HashSet;

use super::NEUTRAL_SCORE;
use crate::skill_normalizer::{normalize_skill_set, normalize_skills_vec};

/// How a profile skill counts against a required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillMatchMode {
    /// A required skill is covered when any profile skill is a
    /// case-insensitive substring of it (equality included).
    #[default]
    Containment,
    /// Strict set membership on the normalized forms.
    Exact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    /// 0-100. Exactly `NEUTRAL_SCORE` when the job lists no skills.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Score the profile's skill coverage of the job's required skills.
///
/// Both sides are run through the skill normalizer first, so alias and
/// casing differences ("K8s" vs "kubernetes") do not register as gaps.
pub fn score_skills(
    job_skills: &[String],
    profile_skills: &[String],
    mode: SkillMatchMode,
) -> SkillMatchOutcome {
    let required = normalize_skills_vec(job_skills);
    if required.is_empty() {
        return SkillMatchOutcome {
            score: NEUTRAL_SCORE,
            matched: vec![],
            missing: vec![],
        };
    }

    let held: HashSet<String> = normalize_skill_set(profile_skills);

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in &required {
        let covered = match mode {
            SkillMatchMode::Exact => held.contains(requirement),
            SkillMatchMode::Containment => {
                held.iter().any(|skill| requirement.contains(skill.as_str()))
            }
        };

        if covered {
            matched.push(requirement.clone());
        } else {
            missing.push(requirement.clone());
        }
    }

    let score = matched.len() as f64 / required.len() as f64 * 100.0;

    SkillMatchOutcome {
        score,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_requirements_scores_neutral() {
        let outcome = score_skills(&[], &skills(&["rust"]), SkillMatchMode::Containment);
        assert_eq!(outcome.score, NEUTRAL_SCORE);
        assert!(outcome.matched.is_empty());
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn partial_coverage_is_proportional() {
        let outcome = score_skills(
            &skills(&["Go", "Java", "Microservices"]),
            &skills(&["Go", "Kubernetes"]),
            SkillMatchMode::Containment,
        );

        assert_eq!(outcome.matched, vec!["golang".to_string()]);
        assert_eq!(
            outcome.missing,
            vec!["java".to_string(), "microservices".to_string()]
        );
        assert!((outcome.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn aliases_count_as_coverage() {
        let outcome = score_skills(
            &skills(&["Kubernetes", "JavaScript"]),
            &skills(&["k8s", "js"]),
            SkillMatchMode::Containment,
        );

        assert_eq!(outcome.score, 100.0);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn exact_mode_requires_membership() {
        // Containment lets a fragment cover the requirement; exact mode
        // only accepts the whole normalized skill.
        let contained = score_skills(
            &skills(&["distributed systems"]),
            &skills(&["systems"]),
            SkillMatchMode::Containment,
        );
        let exact = score_skills(
            &skills(&["distributed systems"]),
            &skills(&["systems"]),
            SkillMatchMode::Exact,
        );

        assert_eq!(contained.score, 100.0);
        assert_eq!(exact.score, 0.0);
    }

    #[test]
    fn empty_profile_misses_everything() {
        let outcome = score_skills(&skills(&["rust"]), &[], SkillMatchMode::Containment);
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.missing, vec!["rust".to_string()]);
    }
}

use super::{
    experience::score_experience,
    location::score_location,
    skills::{score_skills, SkillMatchMode, SkillMatchOutcome},
    title::score_title,
    weights::{MatchWeights, BALANCED_WEIGHTS},
};
use crate::parallel::{batch_map, BatchOutcome, BatchPool, CancelToken};
use crate::{JobRecord, Profile};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    /// Location score when a posting matches none of the profile's
    /// targets. Non-zero keeps relocatable and quietly-hybrid postings
    /// in play; set to 0.0 for strict location matching.
    pub location_fallback: f64,
    pub skill_mode: SkillMatchMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: BALANCED_WEIGHTS,
            location_fallback: 30.0,
            skill_mode: SkillMatchMode::default(),
        }
    }
}

impl MatchConfig {
    /// Read overrides from `JF_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            weights: MatchWeights {
                skill: env_f64("JF_WEIGHT_SKILL").unwrap_or(defaults.weights.skill),
                experience: env_f64("JF_WEIGHT_EXPERIENCE").unwrap_or(defaults.weights.experience),
                location: env_f64("JF_WEIGHT_LOCATION").unwrap_or(defaults.weights.location),
                title: env_f64("JF_WEIGHT_TITLE").unwrap_or(defaults.weights.title),
            },
            location_fallback: env_f64("JF_LOCATION_FALLBACK")
                .unwrap_or(defaults.location_fallback),
            skill_mode: match std::env::var("JF_SKILL_MATCH_MODE").as_deref() {
                Ok("exact") => SkillMatchMode::Exact,
                _ => defaults.skill_mode,
            },
        }
    }
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

/// Outcome of scoring one (profile, job) pair. Built fresh per call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub job_id: String,
    /// Weighted overall score, 0-100.
    pub score: f64,
    pub skill: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    pub gap_reasons: Vec<String>,
}

pub struct Matcher {
    config: MatchConfig,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score one posting against a profile. Pure: identical inputs and
    /// configuration always produce identical reports.
    pub fn score(&self, profile: &Profile, job: &JobRecord) -> MatchReport {
        let skills = score_skills(&job.skills, &profile.skills, self.config.skill_mode);
        let experience = score_experience(profile.experience_years, &job.experience_req);
        let title = score_title(&profile.target_roles, &job.title);
        let location = score_location(
            &profile.target_locations,
            &job.location,
            self.config.location_fallback,
        );

        let weights = &self.config.weights;
        let score = (skills.score * weights.skill
            + experience * weights.experience
            + location * weights.location
            + title * weights.title)
            .clamp(0.0, 100.0);

        let (match_reasons, gap_reasons) = build_reasons(&skills, location, score);

        MatchReport {
            job_id: job.id.clone(),
            score,
            skill: skills.score,
            experience,
            location,
            title,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            match_reasons,
            gap_reasons,
        }
    }

    /// Score a batch of postings concurrently. `results[i]` corresponds
    /// to `jobs[i]`; cancellation leaves unevaluated slots as `None`.
    pub fn score_batch(
        &self,
        pool: &BatchPool,
        profile: &Profile,
        jobs: &[JobRecord],
        cancel: &CancelToken,
    ) -> BatchOutcome<MatchReport> {
        batch_map(pool, jobs, cancel, |job| self.score(profile, job))
    }
}

fn build_reasons(
    skills: &SkillMatchOutcome,
    location: f64,
    score: f64,
) -> (Vec<String>, Vec<String>) {
    let mut reasons = Vec::new();
    let mut gaps = Vec::new();

    let grade = if score >= 80.0 {
        "Excellent match!"
    } else if score >= 60.0 {
        "Strong match."
    } else if score >= 40.0 {
        "Good potential."
    } else {
        "Possible fit."
    };
    reasons.push(grade.to_string());

    if !skills.matched.is_empty() {
        let highlights = skills
            .matched
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        reasons.push(format!(
            "Your skills in {highlights} align well with this role."
        ));
    }

    if location >= 100.0 {
        reasons.push("Location preference matches.".to_string());
    }

    if !skills.missing.is_empty() {
        let wanted = skills
            .missing
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        gaps.push(format!("Consider developing: {wanted}."));
    }

    (reasons, gaps)
}

use serde::{Deserialize, Serialize};

use crate::matching::scoring::MatchReport;

/// Wire-facing view of a single (profile, job) match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub job_id: String,
    /// Weighted overall score, 0-100.
    pub overall_score: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub title_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_reasons: Vec<String>,
    pub gap_reasons: Vec<String>,
}

impl From<&MatchReport> for MatchResponse {
    fn from(report: &MatchReport) -> Self {
        Self {
            job_id: report.job_id.clone(),
            overall_score: report.score,
            skill_match: report.skill,
            experience_match: report.experience,
            location_match: report.location,
            title_match: report.title,
            matched_skills: report.matched_skills.clone(),
            missing_skills: report.missing_skills.clone(),
            match_reasons: report.match_reasons.clone(),
            gap_reasons: report.gap_reasons.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_the_report_over() {
        let report = MatchReport {
            job_id: "job-9".into(),
            score: 81.5,
            skill: 100.0,
            experience: 90.0,
            location: 30.0,
            title: 100.0,
            matched_skills: vec!["rust".into()],
            missing_skills: vec![],
            match_reasons: vec!["Excellent match!".into()],
            gap_reasons: vec![],
        };

        let response = MatchResponse::from(&report);

        assert_eq!(response.job_id, "job-9");
        assert_eq!(response.overall_score, 81.5);
        assert_eq!(response.matched_skills, vec!["rust".to_string()]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["overall_score"], 81.5);
        assert_eq!(json["match_reasons"][0], "Excellent match!");
    }
}

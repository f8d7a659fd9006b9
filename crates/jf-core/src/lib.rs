pub mod api;
pub mod catalog;
pub mod logging;
pub mod matching;
pub mod parallel;
pub mod ranking;
pub mod recommend;
pub mod search;
pub mod skill_normalizer;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub target_roles: Vec<String>,
    #[serde(default)]
    pub target_locations: Vec<String>,
    #[serde(default)]
    pub expected_salary: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    /// Free-text experience requirement as posted ("3-5 years", "5+", ...).
    #[serde(default)]
    pub experience_req: String,
    #[serde(default)]
    pub education_req: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Platform the posting was collected from ("boss", "lagou", "mock", ...).
    #[serde(default)]
    pub source: String,
    pub posted_at: DateTime<Utc>,
}

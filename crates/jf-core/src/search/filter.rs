use crate::matching::experience::{requires_five_plus, requires_mid_band};
use crate::JobRecord;

use super::SearchRequest;

/// Apply every provided predicate conjunctively and return the matching
/// postings in their original order.
pub(crate) fn apply(jobs: &[JobRecord], request: &SearchRequest) -> Vec<JobRecord> {
    jobs.iter()
        .filter(|job| matches_query(job, &request.query))
        .filter(|job| matches_any_substring(&job.location, &request.locations))
        .filter(|job| matches_any_substring(&job.company, &request.companies))
        .filter(|job| matches_level(job, request.experience_level.as_deref()))
        .filter(|job| matches_salary(job, request.salary_min, request.salary_max))
        .cloned()
        .collect()
}

/// Free-text query: OR across title, company, and description.
fn matches_query(job: &JobRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    job.title.to_lowercase().contains(&query)
        || job.company.to_lowercase().contains(&query)
        || job.description.to_lowercase().contains(&query)
}

/// OR-of-substring over the requested values; an empty list filters nothing.
fn matches_any_substring(field: &str, requested: &[String]) -> bool {
    let requested: Vec<String> = requested
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
    if requested.is_empty() {
        return true;
    }

    let field = field.to_lowercase();
    requested.iter().any(|value| field.contains(value))
}

/// Coarse experience bucket over the posting's free-text requirement,
/// using the same sentinel heuristics the scorer uses.
fn matches_level(job: &JobRecord, level: Option<&str>) -> bool {
    let Some(level) = level else {
        return true;
    };
    let level = level.trim().to_lowercase();
    if level.is_empty() {
        return true;
    }

    let requirement = job.experience_req.to_lowercase();
    match level.as_str() {
        "entry" | "junior" | "intern" => {
            !requires_five_plus(&requirement) && !requires_mid_band(&requirement)
        }
        "mid" => requires_mid_band(&requirement),
        "senior" | "lead" => requires_five_plus(&requirement) || requirement.contains("senior"),
        // Unknown buckets do not filter.
        _ => true,
    }
}

/// Salary range overlap. Postings without salary data are kept; absent
/// request bounds are open-ended.
fn matches_salary(job: &JobRecord, min: Option<u32>, max: Option<u32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    let Some(salary) = job.salary else {
        return true;
    };

    let lower_ok = max.map_or(true, |cap| salary.min <= cap);
    let upper_ok = min.map_or(true, |floor| salary.max >= floor);
    lower_ok && upper_ok
}

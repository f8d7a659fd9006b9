mod facets;
mod filter;

pub use facets::{Facet, FacetValue};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::JobRecord;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_page_size: env_usize("JF_SEARCH_DEFAULT_PAGE_SIZE")
                .unwrap_or(defaults.default_page_size),
            max_page_size: env_usize("JF_SEARCH_MAX_PAGE_SIZE").unwrap_or(defaults.max_page_size),
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Keep the filtered order as-is.
    #[default]
    Relevance,
    /// Posting timestamp, newest first.
    Recency,
    /// Salary range upper bound, highest first; postings without salary
    /// data sort last, company name breaks ties.
    Salary,
    /// Company name, ascending.
    Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query matched against title, company, or description.
    #[serde(default)]
    pub query: String,
    /// Any of these substrings may match the posting location.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Any of these substrings may match the company name.
    #[serde(default)]
    pub companies: Vec<String>,
    /// Coarse bucket: "entry", "junior", "mid", "senior", "lead".
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub sort: SortBy,
    /// 1-based. Out-of-range values clamp instead of erroring.
    #[serde(default = "first_page")]
    pub page: usize,
    /// Clamped to the configured [1, max] range; `None` uses the default.
    #[serde(default)]
    pub page_size: Option<usize>,
}

fn first_page() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub jobs: Vec<JobRecord>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub facets: Vec<Facet>,
}

/// Filter, facet, sort, and paginate a job collection.
///
/// Facet counts are computed over the whole filtered set, before
/// pagination slices it.
pub fn search(jobs: &[JobRecord], request: &SearchRequest, config: &SearchConfig) -> SearchPage {
    let mut filtered = filter::apply(jobs, request);
    let facets = facets::collect(&filtered);
    sort(&mut filtered, request.sort);

    let total = filtered.len();
    let page_size = request
        .page_size
        .unwrap_or(config.default_page_size)
        .clamp(1, config.max_page_size);
    let total_pages = total.div_ceil(page_size);
    let page = request.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let page_jobs = if start < total {
        filtered[start..end].to_vec()
    } else {
        vec![]
    };

    debug!(
        total,
        page,
        page_size,
        total_pages,
        sort = ?request.sort,
        "search assembled"
    );

    SearchPage {
        jobs: page_jobs,
        total,
        page,
        page_size,
        total_pages,
        facets,
    }
}

fn sort(jobs: &mut [JobRecord], order: SortBy) {
    match order {
        SortBy::Relevance => {}
        SortBy::Recency => jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
        SortBy::Salary => jobs.sort_by(|a, b| {
            let a_max = a.salary.map(|s| s.max);
            let b_max = b.salary.map(|s| s.max);
            match (a_max, b_max) {
                (Some(x), Some(y)) => y
                    .cmp(&x)
                    .then_with(|| a.company.to_lowercase().cmp(&b.company.to_lowercase())),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.company.to_lowercase().cmp(&b.company.to_lowercase()),
            }
        }),
        SortBy::Company => {
            jobs.sort_by(|a, b| a.company.to_lowercase().cmp(&b.company.to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn job(id: &str, title: &str, company: &str, location: &str) -> JobRecord {
        JobRecord {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            experience_req: String::new(),
            education_req: None,
            description: String::new(),
            skills: vec![],
            benefits: vec![],
            source: "mock".into(),
            posted_at: Utc::now(),
        }
    }

    fn many_jobs(n: usize) -> Vec<JobRecord> {
        (0..n)
            .map(|i| job(&format!("j{i}"), "Engineer", "Acme", "Remote"))
            .collect()
    }

    #[test]
    fn paginates_with_one_based_pages() {
        let jobs = many_jobs(45);
        let request = SearchRequest {
            page: 1,
            ..SearchRequest::default()
        };

        let page = search(&jobs, &request, &SearchConfig::default());

        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.jobs.len(), 20);
        assert_eq!(page.jobs[0].id, "j0");
    }

    #[test]
    fn out_of_range_page_clamps() {
        let jobs = many_jobs(45);
        let request = SearchRequest {
            page: 10,
            ..SearchRequest::default()
        };

        let page = search(&jobs, &request, &SearchConfig::default());

        assert_eq!(page.page, 3);
        assert_eq!(page.jobs.len(), 5);
        assert_eq!(page.jobs[0].id, "j40");
    }

    #[test]
    fn zero_page_clamps_to_first() {
        let jobs = many_jobs(5);
        let request = SearchRequest {
            page: 0,
            ..SearchRequest::default()
        };

        let page = search(&jobs, &request, &SearchConfig::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.jobs.len(), 5);
    }

    #[test]
    fn page_size_is_clamped_to_bounds() {
        let jobs = many_jobs(120);
        let request = SearchRequest {
            page_size: Some(500),
            ..SearchRequest::default()
        };

        let page = search(&jobs, &request, &SearchConfig::default());
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(page.jobs.len(), MAX_PAGE_SIZE);

        let request = SearchRequest {
            page_size: Some(0),
            ..SearchRequest::default()
        };
        let page = search(&jobs, &request, &SearchConfig::default());
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn empty_result_set_has_one_clamp_target() {
        let request = SearchRequest {
            query: "nothing matches this".into(),
            page: 7,
            ..SearchRequest::default()
        };

        let page = search(&many_jobs(3), &request, &SearchConfig::default());

        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.jobs.is_empty());
    }

    #[test]
    fn recency_sort_puts_newest_first() {
        let now = Utc::now();
        let mut old = job("old", "Engineer", "Acme", "Remote");
        old.posted_at = now - Duration::days(9);
        let mut fresh = job("fresh", "Engineer", "Acme", "Remote");
        fresh.posted_at = now - Duration::days(1);

        let request = SearchRequest {
            sort: SortBy::Recency,
            ..SearchRequest::default()
        };
        let page = search(&[old, fresh], &request, &SearchConfig::default());

        assert_eq!(page.jobs[0].id, "fresh");
    }

    #[test]
    fn salary_sort_is_deterministic_without_salary_data() {
        let mut paid = job("paid", "Engineer", "Zenith", "Remote");
        paid.salary = Some(crate::SalaryRange {
            min: 100_000,
            max: 150_000,
        });
        let unpaid_a = job("ua", "Engineer", "Acme", "Remote");
        let unpaid_b = job("ub", "Engineer", "Beta", "Remote");

        let request = SearchRequest {
            sort: SortBy::Salary,
            ..SearchRequest::default()
        };
        let page = search(
            &[unpaid_b, paid, unpaid_a],
            &request,
            &SearchConfig::default(),
        );

        let order: Vec<&str> = page.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(order, vec!["paid", "ua", "ub"]);
    }

    #[test]
    fn company_sort_is_case_insensitive() {
        let request = SearchRequest {
            sort: SortBy::Company,
            ..SearchRequest::default()
        };
        let page = search(
            &[
                job("1", "Engineer", "zeta", "Remote"),
                job("2", "Engineer", "Alpha", "Remote"),
            ],
            &request,
            &SearchConfig::default(),
        );

        assert_eq!(page.jobs[0].company, "Alpha");
    }
}

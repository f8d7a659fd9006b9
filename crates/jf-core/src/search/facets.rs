use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::JobRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

/// Distinct-value counts for one categorical field, computed over the
/// filtered (pre-pagination) result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub field: String,
    pub values: Vec<FacetValue>,
}

/// Facets for the fields the result UI drills into: location, source
/// platform, and company.
pub(crate) fn collect(jobs: &[JobRecord]) -> Vec<Facet> {
    vec![
        facet_for(jobs, "location", |job| &job.location),
        facet_for(jobs, "source", |job| &job.source),
        facet_for(jobs, "company", |job| &job.company),
    ]
}

fn facet_for<F>(jobs: &[JobRecord], field: &str, extract: F) -> Facet
where
    F: Fn(&JobRecord) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        let value = extract(job).trim();
        if !value.is_empty() {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            value: value.to_string(),
            count,
        })
        .collect();

    // Highest count first, value as the deterministic tiebreaker.
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    Facet {
        field: field.to_string(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(location: &str, source: &str, company: &str) -> JobRecord {
        JobRecord {
            id: "j".into(),
            title: "Engineer".into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            experience_req: String::new(),
            education_req: None,
            description: String::new(),
            skills: vec![],
            benefits: vec![],
            source: source.into(),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn counts_are_exact_over_the_input_set() {
        let jobs = vec![
            job("Remote", "boss", "Acme"),
            job("Remote", "lagou", "Acme"),
            job("Seattle, WA", "boss", "Beta"),
        ];

        let facets = collect(&jobs);
        let location = facets.iter().find(|f| f.field == "location").unwrap();

        assert_eq!(
            location.values,
            vec![
                FacetValue {
                    value: "Remote".into(),
                    count: 2
                },
                FacetValue {
                    value: "Seattle, WA".into(),
                    count: 1
                },
            ]
        );

        let source = facets.iter().find(|f| f.field == "source").unwrap();
        assert_eq!(source.values[0].value, "boss");
        assert_eq!(source.values[0].count, 2);
    }

    #[test]
    fn blank_values_are_not_counted() {
        let jobs = vec![job("", "boss", "Acme")];
        let facets = collect(&jobs);
        let location = facets.iter().find(|f| f.field == "location").unwrap();
        assert!(location.values.is_empty());
    }

    #[test]
    fn ties_order_by_value() {
        let jobs = vec![job("B-Town", "s", "x"), job("A-Town", "s", "x")];
        let facets = collect(&jobs);
        let location = facets.iter().find(|f| f.field == "location").unwrap();
        assert_eq!(location.values[0].value, "A-Town");
    }
}

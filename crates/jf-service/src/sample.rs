use chrono::{Duration, Utc};

use jf_core::{JobRecord, Profile, SalaryRange};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Demo catalog used by the CLI when no catalog file is given. Stable
/// ids so batch/exclude flags can be exercised from the shell.
pub fn sample_jobs() -> Vec<JobRecord> {
    let now = Utc::now();
    let job = |days_ago: i64| now - Duration::days(days_ago);

    vec![
        JobRecord {
            id: "job-001".into(),
            title: "Senior Software Engineer".into(),
            company: "Google".into(),
            location: "Mountain View, CA".into(),
            salary: Some(SalaryRange {
                min: 180_000,
                max: 250_000,
            }),
            experience_req: "5+ years of software development experience".into(),
            education_req: Some("Bachelor's degree in CS or equivalent".into()),
            description: "Join Google's Cloud team to build next-generation infrastructure services.".into(),
            skills: strings(&["Java", "Go", "Kubernetes", "GCP", "Distributed Systems"]),
            benefits: strings(&[
                "Competitive salary and equity",
                "Health, dental, and vision insurance",
                "Unlimited PTO",
            ]),
            source: "mock".into(),
            posted_at: job(1),
        },
        JobRecord {
            id: "job-002".into(),
            title: "Full Stack Developer".into(),
            company: "Netflix".into(),
            location: "Los Gatos, CA".into(),
            salary: Some(SalaryRange {
                min: 150_000,
                max: 220_000,
            }),
            experience_req: "3+ years of full stack development".into(),
            education_req: None,
            description: "Build the future of entertainment with Netflix's product engineering team.".into(),
            skills: strings(&["React", "Node.js", "TypeScript", "AWS", "GraphQL"]),
            benefits: strings(&["Top-tier compensation", "Stock options", "Unlimited vacation"]),
            source: "mock".into(),
            posted_at: job(2),
        },
        JobRecord {
            id: "job-003".into(),
            title: "Remote Backend Engineer".into(),
            company: "Stripe".into(),
            location: "Remote".into(),
            salary: Some(SalaryRange {
                min: 160_000,
                max: 230_000,
            }),
            experience_req: "4+ years of backend development".into(),
            education_req: None,
            description: "Help build the economic infrastructure for the internet.".into(),
            skills: strings(&["Ruby", "Go", "PostgreSQL", "Redis", "Kafka"]),
            benefits: strings(&["Remote-first culture", "Equity compensation", "Learning budget"]),
            source: "mock".into(),
            posted_at: job(3),
        },
        JobRecord {
            id: "job-004".into(),
            title: "Frontend Developer".into(),
            company: "Airbnb".into(),
            location: "San Francisco, CA".into(),
            salary: Some(SalaryRange {
                min: 140_000,
                max: 200_000,
            }),
            experience_req: "3+ years of frontend development".into(),
            education_req: None,
            description: "Create beautiful and intuitive experiences for travelers worldwide.".into(),
            skills: strings(&["React", "TypeScript", "CSS", "Next.js", "Figma"]),
            benefits: strings(&["Travel credits", "Competitive salary", "Stock options"]),
            source: "mock".into(),
            posted_at: job(4),
        },
        JobRecord {
            id: "job-005".into(),
            title: "DevOps Engineer".into(),
            company: "Amazon".into(),
            location: "Seattle, WA".into(),
            salary: Some(SalaryRange {
                min: 155_000,
                max: 210_000,
            }),
            experience_req: "4+ years of DevOps/SRE experience".into(),
            education_req: None,
            description: "Build and maintain AWS infrastructure serving millions of customers.".into(),
            skills: strings(&["AWS", "Kubernetes", "Terraform", "Python", "Docker"]),
            benefits: strings(&["Sign-on bonus", "RSUs", "Comprehensive benefits"]),
            source: "mock".into(),
            posted_at: job(5),
        },
        JobRecord {
            id: "job-006".into(),
            title: "Junior Software Developer".into(),
            company: "Shopify".into(),
            location: "Remote".into(),
            salary: Some(SalaryRange {
                min: 80_000,
                max: 120_000,
            }),
            experience_req: "0-2 years of development experience".into(),
            education_req: None,
            description: "Start your career building commerce solutions for entrepreneurs.".into(),
            skills: strings(&["Ruby", "Rails", "React", "GraphQL", "MySQL"]),
            benefits: strings(&["Remote work", "Stock options", "Mentorship program"]),
            source: "mock".into(),
            posted_at: job(6),
        },
        JobRecord {
            id: "job-007".into(),
            title: "Machine Learning Engineer".into(),
            company: "OpenAI".into(),
            location: "San Francisco, CA".into(),
            salary: Some(SalaryRange {
                min: 200_000,
                max: 350_000,
            }),
            experience_req: "MS/PhD in ML, CS, or related field".into(),
            education_req: Some("MS/PhD in ML, CS, or related field".into()),
            description: "Build the future of artificial intelligence.".into(),
            skills: strings(&["Python", "PyTorch", "TensorFlow", "CUDA", "Transformers"]),
            benefits: strings(&["Industry-leading compensation", "Equity", "Health benefits"]),
            source: "mock".into(),
            posted_at: job(7),
        },
        JobRecord {
            id: "job-008".into(),
            title: "Contract React Developer".into(),
            company: "Meta".into(),
            location: "Remote".into(),
            salary: None,
            experience_req: "3+ years React experience".into(),
            education_req: None,
            description: "6-month contract to help build next-gen social features.".into(),
            skills: strings(&["React", "React Native", "JavaScript", "GraphQL", "Jest"]),
            benefits: strings(&["Competitive hourly rate", "Flexible schedule", "Remote work"]),
            source: "mock".into(),
            posted_at: job(8),
        },
        JobRecord {
            id: "job-009".into(),
            title: "Software Engineering Intern".into(),
            company: "Microsoft".into(),
            location: "Redmond, WA".into(),
            salary: Some(SalaryRange {
                min: 50_000,
                max: 70_000,
            }),
            experience_req: "Currently pursuing CS degree".into(),
            education_req: Some("Currently pursuing CS degree".into()),
            description: "Summer internship with Azure team.".into(),
            skills: strings(&["C#", ".NET", "Azure", "TypeScript", "Git"]),
            benefits: strings(&["Competitive intern salary", "Housing assistance", "Networking events"]),
            source: "mock".into(),
            posted_at: job(9),
        },
        JobRecord {
            id: "job-010".into(),
            title: "Engineering Lead".into(),
            company: "Spotify".into(),
            location: "New York, NY".into(),
            salary: Some(SalaryRange {
                min: 220_000,
                max: 300_000,
            }),
            experience_req: "8+ years of software development".into(),
            education_req: None,
            description: "Lead a team building the future of audio streaming.".into(),
            skills: strings(&["Java", "Scala", "Kubernetes", "GCP", "Machine Learning"]),
            benefits: strings(&["Executive compensation", "Equity package", "Premium benefits"]),
            source: "mock".into(),
            posted_at: job(10),
        },
    ]
}

/// Companion profile for demos and examples.
pub fn sample_profile() -> Profile {
    Profile {
        id: "demo-candidate".into(),
        skills: strings(&["Go", "Kubernetes", "PostgreSQL", "AWS", "Docker"]),
        experience_years: 6,
        education: Some("Bachelor".into()),
        target_roles: strings(&["Backend Engineer", "Senior Software Engineer"]),
        target_locations: strings(&["Seattle", "San Francisco"]),
        expected_salary: Some(190_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let jobs = sample_jobs();
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();

        assert_eq!(jobs.len(), 10);
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn every_posting_is_searchable() {
        for job in sample_jobs() {
            assert!(!job.title.is_empty());
            assert!(!job.company.is_empty());
            assert!(!job.location.is_empty());
            assert!(!job.skills.is_empty());
            assert_eq!(job.source, "mock");
        }
    }
}

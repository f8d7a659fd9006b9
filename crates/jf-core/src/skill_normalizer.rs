use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill alias -> canonical form mapping (O(1) lookup).
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // Languages
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("python", &["python3", "python 3", "py", "python"]),
        ("java", &["java8", "java11", "java17", "openjdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("ruby", &["ruby lang", "ruby on rails", "rails", "ruby"]),
        ("scala", &["scala lang", "scala"]),
        // Frontend
        (
            "react",
            &["reactjs", "react.js", "react js", "react", "react18"],
        ),
        ("vue", &["vue.js", "vuejs", "vue js", "vue", "vue3"]),
        ("angular", &["angularjs", "angular.js", "angular", "angular2"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        ("css", &["css", "css3", "cascading style sheets"]),
        // Backend frameworks
        (
            "spring",
            &["spring boot", "springboot", "spring framework", "spring"],
        ),
        ("django", &["django rest framework", "drf", "django"]),
        ("flask", &["flask framework", "python flask", "flask"]),
        ("fastapi", &["fast api", "fastapi framework", "fastapi"]),
        // Databases and messaging
        ("postgresql", &["postgres", "pg", "postgresql", "postgre sql"]),
        ("mysql", &["my sql", "mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("redis", &["redis cache", "redis db", "redis"]),
        ("elasticsearch", &["elastic search", "es", "elasticsearch"]),
        ("kafka", &["apache kafka", "kafka streaming", "kafka"]),
        ("rabbitmq", &["rabbit mq", "rabbitmq"]),
        ("graphql", &["graph ql", "graphql"]),
        ("grpc", &["g rpc", "grpc"]),
        // Cloud and infrastructure
        (
            "aws",
            &["amazon web services", "amazon aws", "aws cloud", "aws"],
        ),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure cloud", "azure"]),
        ("docker", &["containerization", "docker container", "docker"]),
        (
            "kubernetes",
            &["k8s", "kube", "kubernetes orchestration", "kubernetes"],
        ),
        ("terraform", &["infrastructure as code", "iac", "terraform"]),
        ("cicd", &["ci/cd", "ci cd", "continuous integration", "cicd"]),
        ("devops", &["dev ops", "devops"]),
        (
            "microservices",
            &["micro services", "microservice", "microservices"],
        ),
        (
            "distributed-systems",
            &["distributed systems", "distributed system"],
        ),
        // ML
        (
            "machine-learning",
            &["machine learning", "ml", "machine-learning"],
        ),
        (
            "deep-learning",
            &["deep learning", "neural networks", "deep-learning"],
        ),
        ("pytorch", &["torch", "py torch", "pytorch"]),
        ("tensorflow", &["tensor flow", "tf", "tensorflow"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Compact-keyed variant of the alias table, for inputs that only differ in
/// separators or width ("Node JS", "node.js").
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, ' ' | '/' | ',' | ';' | '|' | '+'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    if compact.len() < 4 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        // Short canonical tokens (go, java, rust) are only matched via the
        // exact/alias lookups above; fuzzing them produces false positives
        // on brief or ambiguous inputs.
        if alias.len() < 5 || compact.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Convert a skill string to its canonical comparable form.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = nfkc_lower_trim(skill);
    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    for segment in split_segments(skill) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Normalize a skill list into a set, dropping blanks.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}

/// Normalize a skill list into a sorted, deduplicated Vec.
pub fn normalize_skills_vec(skills: &[String]) -> Vec<String> {
    let mut result: Vec<String> = skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty() && s.len() >= 2)
        .collect();
    result.sort();
    result.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_alias_equivalence() {
        assert_eq!(normalize_skill("JavaScript"), "javascript");
        assert_eq!(normalize_skill("js"), "javascript");
        assert_eq!(normalize_skill("K8s"), "kubernetes");
        assert_eq!(normalize_skill("C#"), "csharp");
        assert_eq!(normalize_skill("Go"), "golang");
    }

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize_skill("Node JS"), "nodejs");
        assert_eq!(normalize_skill("Spring Boot"), "spring");
        assert_eq!(normalize_skill("Python/Django"), "python");
    }

    #[test]
    fn tolerates_small_typos_for_known_aliases() {
        assert_eq!(normalize_skill("javascirpt"), "javascript");
        assert_eq!(normalize_skill("kuberntes"), "kubernetes");
        assert_eq!(normalize_skill("pytroch"), "pytorch");
    }

    #[test]
    fn does_not_fuzz_short_tokens() {
        assert_eq!(normalize_skill("ab"), "ab");
        assert_eq!(normalize_skill("javaa"), "javaa");
        assert_eq!(normalize_skill("rustt"), "rustt");
    }

    #[test]
    fn unknown_skill_lowercases() {
        assert_eq!(normalize_skill("MyCustomFramework"), "mycustomframework");
    }

    #[test]
    fn normalization_is_bidirectional() {
        let job_skills = vec!["React.js".to_string(), "K8s".to_string()];
        let profile_skills = vec!["react".to_string(), "kubernetes".to_string()];

        assert_eq!(
            normalize_skill_set(&job_skills),
            normalize_skill_set(&profile_skills)
        );
    }

    #[test]
    fn vec_form_dedupes_and_sorts() {
        let normalized = normalize_skills_vec(&[
            "Python".to_string(),
            "python".to_string(),
            "  JS ".to_string(),
            "javascript".to_string(),
        ]);

        assert_eq!(
            normalized,
            vec!["javascript".to_string(), "python".to_string()]
        );
    }
}

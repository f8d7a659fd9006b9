use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use thiserror::Error;
use tracing::info;

use jf_core::catalog::InMemoryCatalog;
use jf_core::logging;
use jf_core::parallel::CancelToken;
use jf_core::search::{SearchRequest, SortBy};
use jf_core::{JobRecord, Profile};
use jf_service::{sample, MatchService, ServiceConfig, ServiceError};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "jf",
    about = "Score, rank, and search job postings against a candidate profile"
)]
struct Cli {
    /// Catalog JSON file (array of job records). The built-in sample
    /// catalog is used when omitted.
    #[arg(long, env = "JF_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Search the catalog with filters, facets, and pagination
    Search {
        #[arg(long, default_value = "")]
        query: String,
        /// May be given multiple times; any match keeps the posting
        #[arg(long = "location")]
        locations: Vec<String>,
        #[arg(long = "company")]
        companies: Vec<String>,
        /// Coarse bucket: entry, junior, mid, senior, lead
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        salary_min: Option<u32>,
        #[arg(long)]
        salary_max: Option<u32>,
        #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
        sort: SortArg,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Score one posting against a profile
    Match {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        job_id: String,
    },
    /// Score a list of job ids against a profile
    Batch {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long = "job-id", required = true)]
        job_ids: Vec<String>,
    },
    /// Recommend the best-fitting postings for a profile
    Recommend {
        #[arg(long)]
        profile: PathBuf,
        /// Job ids to leave out (already seen/applied)
        #[arg(long = "exclude")]
        exclude: Vec<String>,
        /// 0 uses the configured default; capped by the hard ceiling
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Relevance,
    Recency,
    Salary,
    Company,
}

impl From<SortArg> for SortBy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Relevance => SortBy::Relevance,
            SortArg::Recency => SortBy::Recency,
            SortArg::Salary => SortBy::Salary,
            SortArg::Company => SortBy::Company,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("cannot encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    dotenv().ok();
    logging::init("jf");

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("jf: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let jobs = load_catalog(cli.catalog.as_deref())?;
    info!(jobs = jobs.len(), "catalog loaded");

    let catalog = Arc::new(InMemoryCatalog::new(jobs));
    let service = MatchService::with_config(catalog, ServiceConfig::from_env())?;

    match cli.command {
        Command::Search {
            query,
            locations,
            companies,
            level,
            salary_min,
            salary_max,
            sort,
            page,
            page_size,
        } => {
            let request = SearchRequest {
                query,
                locations,
                companies,
                experience_level: level,
                salary_min,
                salary_max,
                sort: sort.into(),
                page,
                page_size,
            };
            print_json(&service.search(&request))
        }
        Command::Match { profile, job_id } => {
            let profile = load_profile(&profile)?;
            print_json(&service.match_one(&profile, &job_id)?)
        }
        Command::Batch { profile, job_ids } => {
            let profile = load_profile(&profile)?;
            print_json(&service.batch_match(&profile, &job_ids, &CancelToken::new()))
        }
        Command::Recommend {
            profile,
            exclude,
            limit,
        } => {
            let profile = load_profile(&profile)?;
            print_json(&service.recommend(&profile, &exclude, limit))
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Vec<JobRecord>, CliError> {
    match path {
        None => Ok(sample::sample_jobs()),
        Some(path) => read_json(path),
    }
}

fn load_profile(path: &Path) -> Result<Profile, CliError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

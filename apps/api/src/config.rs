use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a sensible local default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job-search API (Remotive-compatible JSON shape).
    pub jobs_api_base_url: String,
    /// Where finished assessments are appended.
    pub results_csv_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_api_base_url: std::env::var("JOBS_API_BASE_URL")
                .unwrap_or_else(|_| "https://remotive.com/api/remote-jobs".to_string()),
            results_csv_path: std::env::var("RESULTS_CSV_PATH")
                .unwrap_or_else(|_| "assessments.csv".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

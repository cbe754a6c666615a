use crate::services::trends_service::TrendsService;
use crate::services::youtube::YouTubeClient;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_YOUTUBE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub youtube: YouTubeConfig,
    pub cors_allowed_origins: Vec<String>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("YOUTUBE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("YOUTUBE_API_KEY environment variable must be set")?;

        let api_url = lookup("YOUTUBE_API_URL").unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string());

        let timeout_secs = match lookup("YOUTUBE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("YOUTUBE_TIMEOUT_SECS must be a number of seconds, got '{raw}'"))?,
            None => DEFAULT_YOUTUBE_TIMEOUT_SECS,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => LevelFilter::from_str(&raw).map_err(|_| anyhow::anyhow!("Invalid LOG_LEVEL '{raw}'"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            youtube: YouTubeConfig {
                api_key,
                api_url,
                timeout_secs,
            },
            cors_allowed_origins,
            log_level,
        })
    }
}

pub fn init_logger(level: LevelFilter) {
    Builder::new().filter_level(level).init();
    info!("Starting trends backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state(config: &Config) -> Result<AppState> {
    let client = YouTubeClient::new(&config.youtube).context("Failed to build YouTube client")?;
    info!("Using YouTube Data API at: {}", config.youtube.api_url);

    Ok(AppState {
        trends_service: TrendsService::new(Arc::new(client)),
    })
}

pub fn create_cors(config: &Config) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(config.cors_allowed_origins.as_slice()))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            "Authorization",
            "Accept",
            "Content-Type",
        ]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Mock identity provider settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct IdentityConfig {
    pub username: String,
    pub password: String,
    pub token: String,
    pub max_retries: u32,
    pub attempt_timeout_ms: u64,
    pub initial_backoff_ms: u64,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    /// Probability in [0, 1] that an attempt fails transiently
    pub failure_rate: f64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            username: "student".to_string(),
            password: "secret".to_string(),
            token: "fake-jwt-token".to_string(),
            max_retries: 3,
            attempt_timeout_ms: 500,
            initial_backoff_ms: 200,
            latency_min_ms: 100,
            latency_max_ms: 400,
            failure_rate: 0.2,
        }
    }
}

impl IdentityConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }
}

/// Assignment upload validation limits
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssignmentConfig {
    pub max_id_len: usize,
    pub max_filename_len: usize,
    pub max_content_bytes: usize,
    pub allowed_extensions: Vec<String>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            max_id_len: 64,
            max_filename_len: 128,
            max_content_bytes: 10 * 1024 * 1024,
            allowed_extensions: ["pdf", "doc", "docx", "ppt", "pptx", "zip", "txt"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Exam backend and circuit breaker settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExamConfig {
    /// Probability in [0, 1] that the simulated exam backend fails
    pub failure_rate: f64,
    pub failure_threshold: u32,
    pub open_duration_secs: u64,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            failure_rate: 0.3,
            failure_threshold: 3,
            open_duration_secs: 10,
        }
    }
}

impl ExamConfig {
    pub fn open_duration(&self) -> Duration {
        Duration::from_secs(self.open_duration_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Request body cap; base64 uploads need headroom over `max_content_bytes`
    pub max_body_bytes: usize,
    pub identity: IdentityConfig,
    pub assignments: AssignmentConfig,
    pub exam: ExamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_body_bytes: 16 * 1024 * 1024,
            identity: IdentityConfig::default(),
            assignments: AssignmentConfig::default(),
            exam: ExamConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load settings from an optional TOML file, then `MADRASATI__*` env vars.
    ///
    /// Without an explicit path, `config/server.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config/server").required(false),
        };

        let s = Config::builder()
            .add_source(file)
            // Override from environment (e.g., MADRASATI__EXAM__FAILURE_RATE)
            .add_source(
                Environment::with_prefix("MADRASATI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("assignments.allowed_extensions"),
            )
            .build()?;

        s.try_deserialize()
    }
}

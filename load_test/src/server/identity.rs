//! Mock identity provider with per-attempt timeout and exponential backoff.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::IdentityConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: String,
}

impl LoginResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            message: message.into(),
        }
    }
}

/// Why a single attempt did not produce an answer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Transient identity provider error")]
    Transient,

    #[error("Auth timed out")]
    TimedOut,
}

#[derive(Debug, Clone)]
pub struct IdentityService {
    config: IdentityConfig,
}

impl IdentityService {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    /// Try up to `max_retries + 1` times, doubling the pause between attempts.
    ///
    /// Wrong credentials are an answer, not a failure, and are not retried.
    pub async fn login_with_retry(&self, body: &LoginBody) -> LoginResponse {
        let mut backoff = self.config.initial_backoff();
        let mut last_error = None;

        for attempt in 1..=self.attempts() {
            match self.attempt_login(body).await {
                Ok(response) => return response,
                Err(e) => {
                    tracing::debug!("Login attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                    if attempt > self.config.max_retries {
                        break;
                    }
                    tokio::time::sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                }
            }
        }

        let reason = last_error.map_or_else(|| "unknown".to_string(), |e| e.to_string());
        tracing::warn!("Login for '{}' failed after retries: {}", body.username, reason);
        LoginResponse::rejected(format!("Login failed after retries: {reason}"))
    }

    fn attempts(&self) -> u32 {
        self.config.max_retries.saturating_add(1)
    }

    async fn attempt_login(&self, body: &LoginBody) -> Result<LoginResponse, LoginError> {
        tokio::time::timeout(self.config.attempt_timeout(), self.simulate_auth(body))
            .await
            .map_err(|_| LoginError::TimedOut)?
    }

    async fn simulate_auth(&self, body: &LoginBody) -> Result<LoginResponse, LoginError> {
        let (latency_ms, roll) = {
            let mut rng = rand::thread_rng();
            let latency_ms = if self.config.latency_max_ms > self.config.latency_min_ms {
                rng.gen_range(self.config.latency_min_ms..=self.config.latency_max_ms)
            } else {
                self.config.latency_min_ms
            };
            (latency_ms, rng.gen::<f64>())
        };

        tokio::time::sleep(std::time::Duration::from_millis(latency_ms)).await;

        if roll < self.config.failure_rate {
            return Err(LoginError::Transient);
        }

        if body.username == self.config.username && body.password == self.config.password {
            Ok(LoginResponse {
                success: true,
                token: Some(self.config.token.clone()),
                message: "ok".to_string(),
            })
        } else {
            Ok(LoginResponse::rejected("invalid credentials"))
        }
    }
}

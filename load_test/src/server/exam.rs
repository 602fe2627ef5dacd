//! Exam submission behind a circuit breaker.

use rand::Rng;
use thiserror::Error;

use super::breaker::{BreakerError, CircuitBreaker, State};
use crate::config::ExamConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Exam backend error")]
pub struct ExamBackendError;

#[derive(Debug)]
pub struct ExamService {
    breaker: CircuitBreaker,
    failure_rate: f64,
}

impl ExamService {
    pub fn new(config: &ExamConfig) -> Self {
        Self {
            breaker: CircuitBreaker::new(config.failure_threshold, config.open_duration()),
            failure_rate: config.failure_rate,
        }
    }

    pub fn submit(&self) -> Result<&'static str, BreakerError<ExamBackendError>> {
        self.breaker.call(|| self.simulated_backend_call())
    }

    pub fn breaker_state(&self) -> State {
        self.breaker.state()
    }

    fn simulated_backend_call(&self) -> Result<&'static str, ExamBackendError> {
        if rand::thread_rng().gen::<f64>() < self.failure_rate {
            return Err(ExamBackendError);
        }
        Ok("exam submitted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_backend_submits() {
        let service = ExamService::new(&ExamConfig {
            failure_rate: 0.0,
            ..ExamConfig::default()
        });
        for _ in 0..10 {
            assert_eq!(service.submit(), Ok("exam submitted"));
        }
        assert_eq!(service.breaker_state(), State::Closed);
    }

    #[test]
    fn failing_backend_trips_breaker() {
        let service = ExamService::new(&ExamConfig {
            failure_rate: 1.0,
            ..ExamConfig::default()
        });
        for _ in 0..3 {
            assert_eq!(service.submit(), Err(BreakerError::Inner(ExamBackendError)));
        }
        assert_eq!(service.submit(), Err(BreakerError::Open));
        assert_eq!(service.breaker_state(), State::Open);
    }
}

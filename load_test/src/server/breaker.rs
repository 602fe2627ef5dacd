//! Circuit breaker guarding calls to a flaky backend.
//!
//! Closed until `failure_threshold` consecutive failures, then Open for
//! `open_duration`. The first call after that runs in HalfOpen: success
//! closes the circuit, failure opens it again.

use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakerError<E> {
    #[error("Circuit is OPEN; rejecting calls")]
    Open,

    #[error("{0}")]
    Inner(E),
}

#[derive(Debug)]
struct Inner {
    state: State,
    consecutive_failures: u32,
    open_since: Option<Instant>,
}

#[derive(Debug)]
pub struct CircuitBreaker {
    failure_threshold: u32,
    open_duration: Duration,
    inner: Mutex<Inner>,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, open_duration: Duration) -> Self {
        Self {
            failure_threshold,
            open_duration,
            inner: Mutex::new(Inner {
                state: State::Closed,
                consecutive_failures: 0,
                open_since: None,
            }),
        }
    }

    pub fn state(&self) -> State {
        self.inner.lock().state
    }

    /// Run `action` unless the circuit is open. Calls are serialized.
    pub fn call<T, E>(&self, action: impl FnOnce() -> Result<T, E>) -> Result<T, BreakerError<E>> {
        let mut inner = self.inner.lock();

        if inner.state == State::Open {
            let cooled_down = inner
                .open_since
                .is_some_and(|since| Instant::now() > since + self.open_duration);
            if !cooled_down {
                return Err(BreakerError::Open);
            }
            tracing::debug!("Circuit half-open, letting one call through");
            inner.state = State::HalfOpen;
        }

        match action() {
            Ok(value) => {
                inner.on_success();
                Ok(value)
            }
            Err(e) => {
                inner.on_failure(self.failure_threshold);
                Err(BreakerError::Inner(e))
            }
        }
    }
}

impl Inner {
    fn on_success(&mut self) {
        match self.state {
            State::HalfOpen => {
                tracing::info!("Circuit closed");
                self.state = State::Closed;
                self.consecutive_failures = 0;
            }
            State::Closed => self.consecutive_failures = 0,
            State::Open => {}
        }
    }

    fn on_failure(&mut self, threshold: u32) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        let trips = self.state == State::HalfOpen
            || (self.state == State::Closed && self.consecutive_failures >= threshold);
        if trips {
            tracing::warn!(
                "Circuit opened after {} consecutive failures",
                self.consecutive_failures
            );
            self.state = State::Open;
            self.open_since = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail() -> Result<(), &'static str> {
        Err("boom")
    }

    fn succeed() -> Result<u8, &'static str> {
        Ok(7)
    }

    #[test]
    fn opens_after_threshold_consecutive_failures() {
        let breaker = CircuitBreaker::new(3, Duration::from_secs(10));
        for _ in 0..2 {
            assert_eq!(breaker.call(fail), Err(BreakerError::Inner("boom")));
            assert_eq!(breaker.state(), State::Closed);
        }
        assert_eq!(breaker.call(fail), Err(BreakerError::Inner("boom")));
        assert_eq!(breaker.state(), State::Open);
    }

    #[test]
    fn success_resets_failure_count() {
        let breaker = CircuitBreaker::new(3, Duration::from_secs(10));
        let _ = breaker.call(fail);
        let _ = breaker.call(fail);
        assert_eq!(breaker.call(succeed), Ok(7));
        let _ = breaker.call(fail);
        let _ = breaker.call(fail);
        assert_eq!(breaker.state(), State::Closed);
    }

    #[test]
    fn open_circuit_rejects_without_calling() {
        let breaker = CircuitBreaker::new(1, Duration::from_secs(10));
        let _ = breaker.call(fail);

        let mut called = false;
        let result = breaker.call(|| {
            called = true;
            Ok::<_, &str>(())
        });
        assert_eq!(result, Err(BreakerError::Open));
        assert!(!called);
        assert_eq!(
            BreakerError::<&str>::Open.to_string(),
            "Circuit is OPEN; rejecting calls"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn half_open_success_closes() {
        let breaker = CircuitBreaker::new(1, Duration::from_secs(10));
        let _ = breaker.call(fail);

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(breaker.call(succeed), Err(BreakerError::Open));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(breaker.call(succeed), Ok(7));
        assert_eq!(breaker.state(), State::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn half_open_failure_reopens() {
        let breaker = CircuitBreaker::new(3, Duration::from_secs(10));
        for _ in 0..3 {
            let _ = breaker.call(fail);
        }

        tokio::time::advance(Duration::from_secs(11)).await;
        assert_eq!(breaker.call(fail), Err(BreakerError::Inner("boom")));
        assert_eq!(breaker.state(), State::Open);

        // Fresh open window starts at the half-open failure
        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(breaker.call(succeed), Err(BreakerError::Open));
    }
}

//! Bounded retry with a fixed pause between attempts.

use crate::config;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: config::RETRY_MAX_ATTEMPTS,
            delay: Duration::from_millis(config::RETRY_DELAY_MSEC),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        RetryPolicy {
            max_attempts,
            delay,
        }
    }

    /// Run `op` until it succeeds, fails with an error `retryable` rejects, or
    /// `max_attempts` is reached. Blocks the thread between attempts.
    pub fn run<T, E, F, P>(&self, op: F, retryable: P) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        self.run_with_sleep(op, retryable, std::thread::sleep)
    }

    /// Same as [`RetryPolicy::run`] with the pause delegated to `sleep`.
    ///
    /// `op` receives the 1-based attempt number.
    pub fn run_with_sleep<T, E, F, P, S>(&self, mut op: F, retryable: P, mut sleep: S) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        P: Fn(&E) -> bool,
        S: FnMut(Duration),
        E: std::fmt::Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if retryable(&e) && attempt < max_attempts => {
                    log::warn!(
                        "attempt {attempt}/{max_attempts} failed, retrying in {delay:?}: {e}",
                        delay = self.delay
                    );
                    sleep(self.delay);
                    attempt += 1;
                }
                Err(e) => {
                    if retryable(&e) {
                        log::error!("giving up after {attempt} attempts: {e}");
                    }
                    return Err(e);
                }
            }
        }
    }
}

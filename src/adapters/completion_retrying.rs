//! Bounded retry wrapper around a completion client.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::thread;
use std::time::Duration;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{Completion, CompletionClient, CompletionRequest};

const DELAY_CAP: Duration = Duration::from_secs(30);
const RETRY_AFTER_HINT: &str = "retry_after_ms=";

/// Retries transient completion failures before giving up.
///
/// The attempt budget counts the first call, so a budget of 1 disables
/// retries entirely. Only one prompt is in flight at a time, so the wrapper
/// sleeps on the calling thread between attempts.
pub struct RetryingCompletionClient {
    inner: Box<dyn CompletionClient>,
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryingCompletionClient {
    pub fn new(inner: Box<dyn CompletionClient>, max_attempts: u32, base_delay: Duration) -> Self {
        Self { inner, max_attempts: max_attempts.max(1), base_delay }
    }

    pub fn from_config(inner: Box<dyn CompletionClient>, config: &ApiConfig) -> Self {
        Self::new(inner, config.max_retries, Duration::from_millis(config.retry_delay_ms))
    }

    /// Delay before the next attempt, after `failed_attempts` failures.
    ///
    /// A server-provided `retry_after_ms` hint wins over the computed
    /// backoff; both are capped at `DELAY_CAP`.
    fn backoff(&self, failed_attempts: u32, error: &AppError) -> Duration {
        if let Some(hint_ms) = retry_after_hint(error) {
            return Duration::from_millis(hint_ms).min(DELAY_CAP);
        }

        let doublings = failed_attempts.saturating_sub(1).min(5);
        let delay = self.base_delay.saturating_mul(1 << doublings);
        delay.saturating_add(jitter(delay)).min(DELAY_CAP)
    }
}

impl CompletionClient for RetryingCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError> {
        let mut attempt = 1;
        loop {
            match self.inner.complete(request.clone()) {
                Ok(completion) => return Ok(completion),
                Err(error) if attempt < self.max_attempts && is_transient(&error) => {
                    let delay = self.backoff(attempt, &error);
                    let summary =
                        error.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
                    eprintln!(
                        "⚠️ Completion attempt {}/{} failed: {}. Retrying in {} ms.",
                        attempt,
                        self.max_attempts,
                        summary,
                        delay.as_millis()
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Transient: rate limiting, request timeout, server errors, or a transport
/// failure that never produced a status.
fn is_transient(error: &AppError) -> bool {
    let AppError::CompletionApi { message, status } = error else {
        return false;
    };

    match status {
        Some(408) | Some(429) => true,
        Some(code) if *code >= 500 => true,
        Some(_) => false,
        None => {
            let text = message.to_ascii_lowercase();
            ["timeout", "timed out", "connect", "temporar"]
                .iter()
                .any(|needle| text.contains(needle))
        }
    }
}

fn retry_after_hint(error: &AppError) -> Option<u64> {
    let AppError::CompletionApi { message, .. } = error else {
        return None;
    };

    let (_, tail) = message.split_once(RETRY_AFTER_HINT)?;
    let end = tail.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(tail.len());
    tail[..end].parse().ok()
}

/// Up to half the current delay, drawn from hasher entropy. Spreads out
/// clients that were rate limited at the same moment.
fn jitter(delay: Duration) -> Duration {
    let cap_ms = delay.as_millis() as u64 / 2;
    if cap_ms == 0 {
        return Duration::ZERO;
    }

    let seed = RandomState::new().build_hasher().finish();
    Duration::from_millis(seed % cap_ms)
}

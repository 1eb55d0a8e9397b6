//! Serialized retry executor
//!
//! The Namecheap API sheds bursts by answering HTTP 405. Retrying such a
//! request right away only makes things worse, so retries follow a fixed
//! backoff schedule and at most one retry sequence per client runs at a time.
//!
//! # Retry strategy
//! - First attempt runs immediately and without locking
//! - Only [`NamecheapError::is_retryable`] errors trigger a retry
//! - The retry sequence (backoff waits included) holds the executor's lock
//! - Every wait races the caller's [`CancellationToken`]

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::{NamecheapError, Result};

/// Ordered backoff delays between attempts.
///
/// A schedule of `n` delays allows `n + 1` attempts in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySchedule {
    delays: Vec<Duration>,
}

impl RetrySchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// Schedule with no retry at all.
    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Total number of attempts the schedule allows.
    pub fn max_attempts(&self) -> usize {
        self.delays.len() + 1
    }
}

/// 1s, 5s, 15s, 30s, 50s.
impl Default for RetrySchedule {
    fn default() -> Self {
        Self::new(
            [1, 5, 15, 30, 50]
                .into_iter()
                .map(Duration::from_secs)
                .collect(),
        )
    }
}

/// Runs attempts under a shared retry lock.
///
/// One instance belongs to one client. Share it through `Arc` when several
/// clients must throttle together.
#[derive(Debug, Default)]
pub struct SyncRetry {
    lock: Mutex<()>,
    schedule: RetrySchedule,
}

impl SyncRetry {
    pub fn new(schedule: RetrySchedule) -> Self {
        Self {
            lock: Mutex::new(()),
            schedule,
        }
    }

    pub fn schedule(&self) -> &RetrySchedule {
        &self.schedule
    }

    /// Runs `attempt` until it succeeds, fails terminally, the schedule runs
    /// out or `cancel` fires.
    ///
    /// # Returns
    /// * `Ok(T)` - the first successful attempt
    /// * `Err(NamecheapError::Cancelled)` - `cancel` fired while waiting or attempting
    /// * `Err(NamecheapError::RetryLimitExceeded)` - every attempt was retryable
    /// * `Err(e)` - the first terminal error
    pub async fn run<T, F, Fut>(&self, cancel: &CancellationToken, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match with_cancel(cancel, attempt()).await {
            Err(e) if e.is_retryable() => {
                log::warn!("[namecheap] {e}, entering retry sequence");
            }
            outcome => return outcome,
        }

        let _guard = tokio::select! {
            guard = self.lock.lock() => guard,
            () = cancel.cancelled() => return Err(NamecheapError::Cancelled),
        };

        let total = self.schedule.max_attempts();
        for (retry, delay) in self.schedule.delays.iter().enumerate() {
            log::debug!(
                "[namecheap] Waiting {:.1}s before attempt {}/{}",
                delay.as_secs_f32(),
                retry + 2,
                total
            );
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(NamecheapError::Cancelled),
                () = tokio::time::sleep(*delay) => {}
            }

            match with_cancel(cancel, attempt()).await {
                Err(e) if e.is_retryable() => {
                    log::warn!("[namecheap] Attempt {}/{} failed: {e}", retry + 2, total);
                }
                outcome => return outcome,
            }
        }

        log::error!("[namecheap] Retry limit exceeded after {total} attempts");
        Err(NamecheapError::RetryLimitExceeded { attempts: total })
    }
}

async fn with_cancel<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(NamecheapError::Cancelled),
        outcome = fut => outcome,
    }
}

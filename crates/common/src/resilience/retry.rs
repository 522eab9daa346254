//! Schedule-driven retry of asynchronous operations
//!
//! An operation is invoked once and, on failure, re-invoked after each delay
//! of a [`RetrySchedule`] in turn. When the schedule runs out the last error
//! is handed back to the caller. A [`RetryPolicy`] may stop early or replace
//! the scheduled delay.
//!
//! There is no cancellation and no per-attempt timeout: only the waits
//! between attempts are governed here.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use super::schedule::RetrySchedule;

/// Why a retried operation ultimately failed
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// Every scheduled attempt failed; `source` is the last error
    #[error("All retry attempts exhausted after {attempts} tries")]
    AttemptsExhausted { attempts: u32, source: E },

    /// The retry policy refused to retry this error
    #[error("Operation failed with non-retryable error after {attempts} tries")]
    NonRetryable { attempts: u32, source: E },
}

impl<E> RetryError<E> {
    /// The error returned by the final attempt
    pub fn into_source(self) -> E {
        match self {
            Self::AttemptsExhausted { source, .. } | Self::NonRetryable { source, .. } => source,
        }
    }

    /// Borrow the error returned by the final attempt
    pub fn source_error(&self) -> &E {
        match self {
            Self::AttemptsExhausted { source, .. } | Self::NonRetryable { source, .. } => source,
        }
    }

    /// Number of attempts made before giving up
    pub fn attempts(&self) -> u32 {
        match self {
            Self::AttemptsExhausted { attempts, .. } | Self::NonRetryable { attempts, .. } => {
                *attempts
            }
        }
    }
}

/// Result type for retry operations
pub type RetryResult<T, E> = Result<T, RetryError<E>>;

/// Outcome of a retry execution including result and summary statistics.
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub result: RetryResult<T, E>,
    pub attempts: u32,
    pub total_delay: Duration,
    pub first_attempt_time: Instant,
    /// Human-readable representation of the last error that occurred.
    pub last_error: Option<String>,
}

impl<T, E> RetryOutcome<T, E> {
    /// Consume the outcome and return only the result.
    pub fn into_result(self) -> RetryResult<T, E> {
        self.result
    }

    /// Get the total elapsed time from first attempt to completion.
    pub fn total_elapsed(&self) -> Duration {
        self.first_attempt_time.elapsed()
    }

    /// Get the average delay between attempts (excludes operation execution
    /// time).
    pub fn average_delay(&self) -> Duration {
        if self.attempts <= 1 {
            return Duration::ZERO;
        }
        self.total_delay / (self.attempts - 1)
    }
}

/// Trait for determining whether an error should be retried
pub trait RetryPolicy<E> {
    /// Decide what to do after `attempt` (0-based) failed with `error`
    fn should_retry(&self, error: &E, attempt: u32) -> RetryDecision;
}

/// Decision for whether to retry an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry after the next scheduled delay
    Retry,
    /// Retry after a custom delay (still consumes a scheduled slot)
    RetryAfter(Duration),
    /// Don't retry the operation
    Stop,
}

/// Runs an operation against a [`RetrySchedule`] under a [`RetryPolicy`]
#[derive(Debug, Clone)]
pub struct RetryExecutor<P> {
    schedule: RetrySchedule,
    policy: P,
}

impl<P> RetryExecutor<P> {
    /// Create a new retry executor with the given schedule and policy
    pub fn new(schedule: RetrySchedule, policy: P) -> Self {
        Self { schedule, policy }
    }

    /// Create with the default schedule
    pub fn with_policy(policy: P) -> Self {
        Self::new(RetrySchedule::default(), policy)
    }

    pub fn schedule(&self) -> &RetrySchedule {
        &self.schedule
    }

    /// Execute an operation with retry logic
    #[instrument(skip(self, operation), fields(max_attempts = self.schedule.max_attempts()))]
    pub async fn execute<F, Fut, T, E>(&self, operation: F) -> RetryResult<T, E>
    where
        P: RetryPolicy<E>,
        E: fmt::Debug,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.execute_with_outcome(operation).await.into_result()
    }

    /// Execute an operation with retry logic and return outcome statistics.
    pub async fn execute_with_outcome<F, Fut, T, E>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        P: RetryPolicy<E>,
        E: fmt::Debug,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let first_attempt_time = Instant::now();
        let max_attempts = self.schedule.max_attempts();
        let mut total_delay = Duration::ZERO;
        let mut attempt: u32 = 0;

        loop {
            let attempt_number = attempt + 1;
            debug!("Executing operation (attempt {}/{})", attempt_number, max_attempts);

            let error = match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("Operation succeeded after {} retries", attempt);
                    }
                    return RetryOutcome {
                        result: Ok(value),
                        attempts: attempt_number,
                        total_delay,
                        first_attempt_time,
                        last_error: None,
                    };
                }
                Err(error) => error,
            };

            let last_error = Some(format!("{error:?}"));
            let Some(scheduled) = self.schedule.delay_after(attempt as usize) else {
                warn!(
                    "All retry attempts exhausted after {} tries, last error: {:?}",
                    attempt_number, error
                );
                return RetryOutcome {
                    result: Err(RetryError::AttemptsExhausted {
                        attempts: attempt_number,
                        source: error,
                    }),
                    attempts: attempt_number,
                    total_delay,
                    first_attempt_time,
                    last_error,
                };
            };

            let delay = match self.policy.should_retry(&error, attempt) {
                RetryDecision::Retry => scheduled,
                RetryDecision::RetryAfter(custom) => custom,
                RetryDecision::Stop => {
                    debug!("Retry policy determined not to retry: {:?}", error);
                    return RetryOutcome {
                        result: Err(RetryError::NonRetryable {
                            attempts: attempt_number,
                            source: error,
                        }),
                        attempts: attempt_number,
                        total_delay,
                        first_attempt_time,
                        last_error,
                    };
                }
            };

            warn!("Operation failed (attempt {}), retrying after {:?}", attempt_number, delay);
            tokio::time::sleep(delay).await;
            total_delay += delay;
            attempt += 1;
        }
    }
}

/// Retry `operation` on every failure following `schedule`
///
/// The operation runs at most `schedule.delays.len() + 1` times. When every
/// attempt fails, the error from the last attempt is returned unchanged.
///
/// ```
/// # #[cfg(feature = "runtime")]
/// # {
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// use primkit_common::resilience::{retry_async_function, RetrySchedule};
///
/// # tokio_test::block_on(async {
/// let calls = AtomicU32::new(0);
/// let schedule = RetrySchedule::from_secs(&[0.0, 0.0]).unwrap();
/// let result: Result<(), String> = retry_async_function(
///     || async { Err(format!("failure #{}", calls.fetch_add(1, Ordering::SeqCst) + 1)) },
///     &schedule,
/// )
/// .await;
/// assert_eq!(result, Err("failure #3".to_string()));
/// # });
/// # }
/// ```
pub async fn retry_async_function<F, Fut, T, E>(operation: F, schedule: &RetrySchedule) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Debug,
{
    RetryExecutor::new(schedule.clone(), policies::AlwaysRetry)
        .execute(operation)
        .await
        .map_err(RetryError::into_source)
}

/// Pause for `seconds` (rounded to the nearest millisecond)
///
/// Negative and non-finite values do not wait.
pub async fn delay(seconds: f64) {
    let millis = (seconds * 1000.0).round();
    if millis.is_finite() && millis > 0.0 {
        tokio::time::sleep(Duration::from_millis(millis as u64)).await;
    }
}

/// Pre-defined retry policies for common scenarios
pub mod policies {
    use super::*;
    use crate::error::ErrorClassification;

    /// Always retry policy - retries on any error
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AlwaysRetry;

    impl<E> RetryPolicy<E> for AlwaysRetry {
        fn should_retry(&self, _error: &E, _attempt: u32) -> RetryDecision {
            RetryDecision::Retry
        }
    }

    /// Never retry policy - never retries
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NeverRetry;

    impl<E> RetryPolicy<E> for NeverRetry {
        fn should_retry(&self, _error: &E, _attempt: u32) -> RetryDecision {
            RetryDecision::Stop
        }
    }

    /// Predicate-based retry policy
    #[derive(Debug)]
    pub struct PredicateRetry<F> {
        predicate: F,
    }

    impl<F> PredicateRetry<F> {
        pub fn new(predicate: F) -> Self {
            Self { predicate }
        }
    }

    impl<F, E> RetryPolicy<E> for PredicateRetry<F>
    where
        F: Fn(&E, u32) -> bool,
    {
        fn should_retry(&self, error: &E, attempt: u32) -> RetryDecision {
            if (self.predicate)(error, attempt) {
                RetryDecision::Retry
            } else {
                RetryDecision::Stop
            }
        }
    }

    /// Retries only errors that classify themselves as retryable
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ClassifiedRetry;

    impl<E: ErrorClassification> RetryPolicy<E> for ClassifiedRetry {
        fn should_retry(&self, error: &E, _attempt: u32) -> RetryDecision {
            if error.is_retryable() {
                RetryDecision::Retry
            } else {
                RetryDecision::Stop
            }
        }
    }
}

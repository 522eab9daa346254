//! Retrying asynchronous operations on a fixed delay schedule
//!
//! - **[`schedule`]**: the ordered delays between attempts, loadable from TOML
//! - **[`retry`]**: the executor, retry policies and the
//!   [`retry_async_function`] convenience wrapper
//!
//! ```
//! # #[cfg(feature = "runtime")]
//! # {
//! use primkit_common::resilience::{policies::ClassifiedRetry, RetryExecutor, RetrySchedule};
//! use primkit_common::UtilError;
//!
//! # tokio_test::block_on(async {
//! let executor = RetryExecutor::new(RetrySchedule::from_secs(&[0.0]).unwrap(), ClassifiedRetry);
//! let result = executor
//!     .execute(|| async { Err::<(), _>(UtilError::invalid_or_empty_array("no items")) })
//!     .await;
//! assert_eq!(result.unwrap_err().attempts(), 1);
//! # });
//! # }
//! ```

pub mod retry;
pub mod schedule;

pub use retry::{
    delay, policies, retry_async_function, RetryDecision, RetryError, RetryExecutor,
    RetryOutcome, RetryPolicy, RetryResult,
};
pub use schedule::{RetrySchedule, ScheduleError};

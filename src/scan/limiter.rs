//! Bounded-concurrency dispatch for the per-height fetch tasks.
//!
//! A counting semaphore caps how many tasks run at any instant. Queued
//! tasks start as permits free up; nothing orders their completions.

use crate::utils::error::ScanError;
use futures::future::try_join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Run a set of fallible tasks with at most `limit` executing at once
///
/// Results come back in dispatch order regardless of completion order.
/// Every handle is awaited before the first task-level error is
/// propagated, so no failure is silently swallowed; a panicked task
/// surfaces as [`ScanError::TaskFailed`].
pub async fn run_limited<T, F>(limit: usize, tasks: Vec<F>) -> Result<Vec<T>, ScanError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ScanError>> + Send + 'static,
{
    let gate = Arc::new(Semaphore::new(limit));

    let handles: Vec<_> = tasks
        .into_iter()
        .map(|task| {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move {
                let _permit = gate
                    .acquire_owned()
                    .await
                    .map_err(|_| ScanError::GateClosed)?;

                task.await
            })
        })
        .collect();

    let settled = try_join_all(handles).await?;

    settled.into_iter().collect()
}

//! Forwarding boundary for asynchronous handlers
//!
//! Awaits the handler's work and hands its error to the failure channel
//! unchanged: no retry, no swallowing, no rewriting.

use std::future::Future;

use crate::errors::{Failure, FailureResult};

/// Await `operation` and convert its error into a `Failure`
pub async fn forward<F, T, E>(operation: F) -> FailureResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
    operation.await.map_err(Into::into)
}

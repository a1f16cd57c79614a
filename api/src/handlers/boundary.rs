//! Asynchronous handler boundary
//!
//! Wraps a fallible async handler so whatever error it produces is converted
//! into an `ApiFailure` and forwarded to the error handler middleware exactly
//! once. Success values pass through untouched.

use std::future::Future;

use actix_web::HttpRequest;
use bw_core::services::forward;
use futures_util::future::{LocalBoxFuture, TryFutureExt};

use super::error::ApiFailure;

/// Adapt `handler` into an actix handler whose errors reach the failure pipeline
///
/// ```ignore
/// web::get().to(async_handler(|req: HttpRequest| async move {
///     let id = parse_id(req.match_info().query("id"))?;
///     Ok::<_, RawError>(HttpResponse::Ok().json(id))
/// }))
/// ```
pub fn async_handler<F, Fut, T, E>(
    handler: F,
) -> impl Fn(HttpRequest) -> LocalBoxFuture<'static, Result<T, ApiFailure>> + Clone + 'static
where
    F: Fn(HttpRequest) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Into<ApiFailure> + 'static,
    T: 'static,
{
    move |req| {
        let operation = handler(req).map_err(|err| Into::<ApiFailure>::into(err).into_failure());
        Box::pin(async move { forward(operation).await.map_err(ApiFailure::from) })
    }
}

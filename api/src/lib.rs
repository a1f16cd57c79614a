//! HTTP binding of the failure pipeline
//!
//! - `middleware` - the error handler owning the error channel
//! - `handlers` - `ApiFailure`, extractor error handlers, the async boundary
//! - `app` - application factory
//! - `config` - configuration loading and `tracing` setup

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

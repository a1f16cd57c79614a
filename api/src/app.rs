//! Application factory
//!
//! Wires the extractor limits and error handlers, request tracing, the
//! not-found default service and the error handler middleware around the
//! caller's routes.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use bw_core::services::ErrorPipeline;
use bw_shared::config::ServerConfig;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::middleware::ErrorHandlerMiddleware;

/// Create the application with the error channel installed
pub fn create_app<F>(
    pipeline: Arc<ErrorPipeline>,
    server: &ServerConfig,
    routes: F,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    App::new()
        .app_data(
            web::JsonConfig::default()
                .limit(server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PayloadConfig::new(server.max_payload_size))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Registered last, so it wraps everything else
        .wrap(TracingLogger::default())
        .wrap(ErrorHandlerMiddleware::new(pipeline))
        .configure(routes)
        .default_service(web::route().to(not_found))
}

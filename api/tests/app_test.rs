//! Application factory and routes mounted by the binary

use std::sync::Arc;

use actix_web::{test, web, App, HttpResponse};
use serde_json::Value;

use bw_api::app::create_app;
use bw_api::handlers::ApiFailure;
use bw_api::routes;
use bw_core::errors::RawError;
use bw_core::services::{ClassifierConfig, ErrorPipeline, MemoryFailureLogger};
use bw_shared::config::{DisclosureMode, ServerConfig};

#[actix_web::test]
async fn test_health_check() {
    let server = ServerConfig::default();
    let pipeline = Arc::new(ErrorPipeline::with_logger(
        ClassifierConfig::for_server(DisclosureMode::Production, &server),
        Arc::new(MemoryFailureLogger::new()),
    ));
    let app = test::init_service(create_app(pipeline, &server, routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "bw_api");
}

#[actix_web::test]
async fn test_unknown_path_is_not_found_in_development() {
    let server = ServerConfig::default();
    let logger = MemoryFailureLogger::new();
    let pipeline = Arc::new(ErrorPipeline::with_logger(
        ClassifierConfig::for_server(DisclosureMode::Development, &server),
        Arc::new(logger.clone()),
    ));
    let app = test::init_service(create_app(pipeline, &server, routes::configure)).await;

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Resource not found");
    assert!(body["stack"].is_string());
    assert_eq!(logger.records().len(), 1);
}

async fn leaky() -> Result<HttpResponse, ApiFailure> {
    Err(RawError::unclassified()
        .with_message("password authentication failed for user admin")
        .into())
}

#[actix_web::test]
async fn test_api_failure_is_safe_without_middleware() {
    let app = test::init_service(App::new().route("/leaky", web::get().to(leaky))).await;

    let req = test::TestRequest::get().uri("/leaky").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ServerError");
    assert_eq!(body["message"], "An internal server error occurred");
    assert!(body.get("stack").is_none());
}

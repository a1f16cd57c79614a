//! Error handler middleware
//!
//! Sits outermost in the app and owns the error channel: every error a route,
//! extractor or default service produces is classified, logged and sanitized
//! here exactly once before the response leaves the server.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::{Error, HttpRequest};
use bw_core::domain::RequestContext;
use bw_core::services::ErrorPipeline;
use futures_util::future::LocalBoxFuture;

use crate::dto::error::reply_to_response;
use crate::handlers::error::failure_of;

/// Middleware translating errors through an `ErrorPipeline`
#[derive(Clone)]
pub struct ErrorHandlerMiddleware {
    pipeline: Arc<ErrorPipeline>,
}

impl ErrorHandlerMiddleware {
    pub fn new(pipeline: Arc<ErrorPipeline>) -> Self {
        Self { pipeline }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
            pipeline: Arc::clone(&self.pipeline),
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
    pipeline: Arc<ErrorPipeline>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let pipeline = Arc::clone(&self.pipeline);
        // Routing needs sole ownership of the request, so capture context up front
        let context = request_context(req.request());

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let failure = res.response().error().map(failure_of);
                    match failure {
                        Some(failure) => {
                            let reply = pipeline.handle(&failure, &context);
                            let (http_req, _) = res.into_parts();
                            let res = ServiceResponse::new(http_req, reply_to_response(&reply));
                            Ok(res.map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    let reply = pipeline.handle(&failure_of(&err), &context);
                    Err(InternalError::from_response(err, reply_to_response(&reply)).into())
                }
            }
        })
    }
}

/// Method, path with query string, and client address of `req`
pub fn request_context(req: &HttpRequest) -> RequestContext {
    let path = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_string(), |pq| pq.as_str().to_string());
    let context = RequestContext::new(req.method().as_str(), path);
    let client = req
        .connection_info()
        .realip_remote_addr()
        .map(str::to_string);
    match client {
        Some(addr) => context.with_client_addr(addr),
        None => context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{self, TestRequest};
    use actix_web::{web, App, HttpResponse};
    use bw_core::errors::DomainError;
    use bw_core::services::{ClassifierConfig, LoggedFailure, MemoryFailureLogger};
    use bw_shared::config::DisclosureMode;

    use crate::handlers::error::ApiFailure;

    async fn lookup(id: web::Path<u32>) -> Result<HttpResponse, ApiFailure> {
        match id.into_inner() {
            7 => Err(DomainError::not_found("Order not found").into()),
            id => Ok(HttpResponse::Ok().body(id.to_string())),
        }
    }

    fn middleware(logger: &MemoryFailureLogger) -> ErrorHandlerMiddleware {
        ErrorHandlerMiddleware::new(Arc::new(ErrorPipeline::with_logger(
            ClassifierConfig::new(DisclosureMode::Production),
            Arc::new(logger.clone()),
        )))
    }

    #[actix_web::test]
    async fn test_routed_request_with_path_params_passes_through() {
        let logger = MemoryFailureLogger::new();
        let app = test::init_service(
            App::new()
                .wrap(middleware(&logger))
                .route("/orders/{id}", web::get().to(lookup)),
        )
        .await;

        let req = TestRequest::get().uri("/orders/42").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "42");
        assert!(logger.records().is_empty());
    }

    #[actix_web::test]
    async fn test_handler_error_replaced_with_pipeline_reply() {
        let logger = MemoryFailureLogger::new();
        let app = test::init_service(
            App::new()
                .wrap(middleware(&logger))
                .route("/orders/{id}", web::get().to(lookup)),
        )
        .await;

        let req = TestRequest::get().uri("/orders/7?verbose=1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Order not found");
        match logger.records().as_slice() {
            [LoggedFailure::Error { line, .. }] => {
                assert!(line.starts_with("404 - Order not found - /orders/7?verbose=1 - GET"));
            }
            other => panic!("unexpected records: {:?}", other),
        }
    }

    #[test]
    fn test_request_context_keeps_query_string() {
        let req = TestRequest::post()
            .uri("/api/v1/orders?page=2")
            .peer_addr("10.0.0.7:5555".parse().unwrap())
            .to_http_request();
        let context = request_context(&req);
        assert_eq!(context.method, "POST");
        assert_eq!(context.path, "/api/v1/orders?page=2");
        assert!(context.client().starts_with("10.0.0.7"));
    }

    #[test]
    fn test_request_context_without_peer() {
        let req = TestRequest::get().uri("/health").to_http_request();
        let context = request_context(&req);
        assert_eq!(context.path, "/health");
    }
}

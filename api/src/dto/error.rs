use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use bw_core::services::ErrorReply;
pub use bw_shared::errors::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// HTTP status of a reply; classification only yields 4xx/5xx codes
pub fn reply_status(reply: &ErrorReply) -> StatusCode {
    StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Render a pipeline reply as the response sent to the client
pub fn reply_to_response(reply: &ErrorReply) -> HttpResponse {
    reply.body.to_response(reply_status(reply))
}

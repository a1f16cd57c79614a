use actix_web::web;

use crate::handlers::health_check;

/// Service routes mounted by `create_app`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

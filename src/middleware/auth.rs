use actix_web::middleware::Next;
use actix_web::{
    Error, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
};
use tracing::{debug, info};

use crate::config::get_config;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Admin API bearer-token guard.
    ///
    /// An empty configured token disables the admin API entirely: the
    /// routes answer 404 as if they did not exist.
    pub async fn admin_auth(
        req: ServiceRequest,
        next: Next<BoxBody>,
    ) -> Result<ServiceResponse<BoxBody>, Error> {
        if req.method() == actix_web::http::Method::OPTIONS {
            return Ok(req.into_response(
                HttpResponse::NoContent()
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .finish(),
            ));
        }

        let admin_token = &get_config().api.admin_token;

        if admin_token.is_empty() {
            return Ok(req.into_response(
                HttpResponse::NotFound()
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Not Found"),
            ));
        }

        if let Some(auth_header) = req.headers().get("Authorization") {
            if let Some(auth_bytes) = auth_header.as_bytes().strip_prefix(b"Bearer ") {
                if auth_bytes == admin_token.as_bytes() {
                    debug!("Admin API authentication succeeded");
                    return next.call(req).await;
                }
            }
        }

        info!("Admin API authentication failed: token mismatch or missing Authorization header");
        Ok(req.into_response(
            HttpResponse::Unauthorized()
                .append_header(("Content-Type", "application/json; charset=utf-8"))
                .json(serde_json::json!({
                    "code": 401,
                    "data": { "error": "Unauthorized: Invalid or missing token" }
                })),
        ))
    }
}

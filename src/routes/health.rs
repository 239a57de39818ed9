use crate::models::{HealthResponse, RouteResponse};
use actix_web::get;

/// # Health Check Endpoint
///
/// Returns `"ok"` with the current time. Served by every example, page
/// apps included.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-01-01T00:00:00.000Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> RouteResponse {
    RouteResponse::from(HealthResponse::ok())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

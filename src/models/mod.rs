use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

/// # Health Status Response
///
/// Liveness payload with the time of the check.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-01-01T00:00:00.000Z"
/// }
/// ```
pub mod health;

/// Landing page markup for the page-style examples.
pub mod page;

/// Root payload for the API-style examples.
pub mod welcome;

pub use health::HealthResponse;
pub use page::PageContent;
pub use welcome::{API_VERSION, WelcomeResponse};

/// JSON body returned by either route.
///
/// Serialized without a tag, so each variant produces exactly the fields of
/// its payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RouteResponse {
    Welcome(WelcomeResponse),
    Health(HealthResponse),
}

impl From<WelcomeResponse> for RouteResponse {
    fn from(response: WelcomeResponse) -> Self {
        Self::Welcome(response)
    }
}

impl From<HealthResponse> for RouteResponse {
    fn from(response: HealthResponse) -> Self {
        Self::Health(response)
    }
}

impl Responder for RouteResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

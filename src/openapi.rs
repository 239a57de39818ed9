use utoipa::OpenApi;

/// OpenAPI description of the two routes every example exposes.
///
/// Generated at compile time from the handler annotations. It is not served
/// by the examples; render it with `ApiDoc::openapi().to_pretty_json()`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::index,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::welcome::WelcomeResponse,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Welcome", description = "Static welcome payload or landing page"),
        (name = "Health Check", description = "Liveness and current server time")
    ),
    info(
        description = "Minimal example servers deployed with ShipNode",
        title = "ShipNode Examples",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;

use actix_web::web;

/// # Health Check Endpoint
///
/// Returns `"ok"` and the current time in ISO 8601 format.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-01-01T00:00:00.000Z"
/// }
/// ```
pub mod health;

/// # Root Endpoint
///
/// Welcome payload (API examples) or landing page (page examples). Reads the
/// active [`Example`](crate::example::Example) from application data.
pub mod index;

/// # Route Configuration
///
/// Mounts the two routes every example exposes at the server root:
///
/// ```text
/// GET /        - Welcome payload or landing page
/// GET /health  - Service health status
/// ```
///
/// Anything else falls through to the actix-web default 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(index::configure_routes)
        .configure(health::configure_routes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::Example;
    use crate::models::{HealthResponse, WelcomeResponse};
    use actix_web::{App, test};
    use chrono::{DateTime, Utc};

    async fn create_test_app(
        example: Example,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(example))
                .configure(configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_api_examples_root() {
        for example in [Example::ExpressApi, Example::NestApi] {
            let app = create_test_app(example).await;
            let req = test::TestRequest::get().uri("/").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);

            let body: WelcomeResponse = test::read_body_json(resp).await;
            assert!(!body.message.is_empty());
            assert!(body.message.contains(example.framework()));
            assert_eq!(body.version, "1.0.0");
        }
    }

    #[actix_web::test]
    async fn test_page_examples_root() {
        let app = create_test_app(Example::ReactRouterApp).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("<h1>Welcome to React Router v7 with ShipNode</h1>"));
        for feature in [
            "Client-side routing",
            "React Router v7",
            "Vite for fast development",
            "Static frontend deployment",
        ] {
            assert!(html.contains(&format!("<li>{}</li>", feature)), "missing {}", feature);
        }
    }

    #[actix_web::test]
    async fn test_every_example_reports_health() {
        let started = Utc::now() - chrono::Duration::milliseconds(1);

        for example in Example::ALL {
            let app = create_test_app(example).await;
            let req = test::TestRequest::get().uri("/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{:?}", example);

            let body: HealthResponse = test::read_body_json(resp).await;
            assert_eq!(body.status, "ok");
            let ts = DateTime::parse_from_rfc3339(&body.timestamp)
                .expect("timestamp should be ISO-8601")
                .with_timezone(&Utc);
            assert!(ts >= started);
        }
    }

    #[actix_web::test]
    async fn test_unknown_path_is_not_found() {
        for example in Example::ALL {
            let app = create_test_app(example).await;
            let req = test::TestRequest::get().uri("/does-not-exist").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 404);
        }
    }
}

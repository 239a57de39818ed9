use crate::example::{Example, RootContent};
use crate::models::{RouteResponse, WelcomeResponse};
use actix_web::http::header::ContentType;
use actix_web::{Either, HttpResponse, get, web};

/// # Root Endpoint
///
/// API examples answer with a static welcome payload; page examples answer
/// with their landing page as an HTML document.
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Welcome to Express API",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome payload, or the landing page for page examples", body = WelcomeResponse)
    ),
    tag = "Welcome"
)]
#[get("/")]
pub async fn index(example: web::Data<Example>) -> Either<RouteResponse, HttpResponse> {
    match example.root() {
        RootContent::Json(welcome) => Either::Left(RouteResponse::from(welcome)),
        RootContent::Page(page) => Either::Right(
            HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(page.render()),
        ),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_express_root_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Example::ExpressApi))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"message":"Welcome to Express API","version":"1.0.0"}"#
        );
    }

    #[actix_web::test]
    async fn test_next_root_is_html() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Example::NextApp))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<h1>Welcome to Next.js with ShipNode</h1>"));
        assert!(html.contains("<title>Next.js ShipNode Example</title>"));
        assert!(html.contains("<li>React Server Components</li>"));
    }

    #[actix_web::test]
    async fn test_root_without_example_data_fails() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_server_error());
    }
}

use shipnode_examples::Example;
use shipnode_examples::error::ServerError;

/// React Router-style single-page app.
///
/// - `GET /`: single-page app shell
/// - `GET /health`: status and current time
///
/// Listens on `0.0.0.0:$PORT` (default 3000); `.env` is read if present.
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    shipnode_examples::server::run(Example::ReactRouterApp).await
}

use shipnode_examples::Example;
use shipnode_examples::error::ServerError;

/// NestJS-style API server.
///
/// - `GET /`: JSON welcome payload
/// - `GET /health`: status and current time
///
/// Listens on `0.0.0.0:$PORT` (default 3000); `.env` is read if present.
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    shipnode_examples::server::run(Example::NestApi).await
}

use shipnode_examples::Example;
use shipnode_examples::error::ServerError;

/// Next.js-style server-rendered app.
///
/// - `GET /`: server-rendered landing page
/// - `GET /health`: status and current time
///
/// Listens on `0.0.0.0:$PORT` (default 3000); `.env` is read if present.
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    shipnode_examples::server::run(Example::NextApp).await
}

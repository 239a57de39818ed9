use std::net::SocketAddr;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::example::Example;

/// Request bodies above this size are rejected by the JSON extractor.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` filter; actix-web's `log` records are bridged into it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().limit(JSON_BODY_LIMIT)
}

/// The application every worker runs for `example`: request logger, JSON
/// body limit, the active example and both routes.
pub fn app(
    example: Example,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(json_config())
        .app_data(web::Data::new(example))
        .configure(crate::routes::configure)
}

/// Binds `addr` and returns the not-yet-awaited server together with the
/// address it listens on.
pub fn bind(example: Example, addr: &str) -> Result<(Server, SocketAddr), ServerError> {
    let server = HttpServer::new(move || app(example))
        .bind(addr)
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    let local = server.addrs().first().copied().ok_or_else(|| ServerError::Bind {
        addr: addr.to_string(),
        source: std::io::Error::from(std::io::ErrorKind::AddrNotAvailable),
    })?;

    Ok((server.run(), local))
}

/// Serves `example` until the server is stopped.
///
/// Loads `.env`, reads `PORT` and binds `0.0.0.0:<port>`. A bind failure is
/// returned to the caller; nothing is retried.
pub async fn run(example: Example) -> Result<(), ServerError> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    let (server, _) = bind(example, &config.bind_addr())?;

    tracing::info!(
        "{} server running on port {}",
        example.framework(),
        config.port
    );

    server.await?;
    Ok(())
}

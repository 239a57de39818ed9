pub mod config;
pub mod error;
pub mod example;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;

pub use example::Example;

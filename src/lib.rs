pub mod config;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod server;
pub mod telemetry;

use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin of the landing page, for CORS.
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        Self {
            database_url,
            bind_addr,
            cors_origin,
        }
    }
}

//! Server configuration, loaded once at startup from the environment.

/// Runtime settings for the HTTP server.
///
/// Defaults suit local development; deployments override via environment
/// variables (`HOST`, `PORT`, `CORS_ORIGINS`, `REQUEST_TIMEOUT_SECS`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default `0.0.0.0`).
    pub host: String,
    /// Bind port (default `3000`).
    pub port: u16,
    /// Allowed CORS origins, comma-separated in `CORS_ORIGINS`
    /// (default `http://localhost:4200`, the dev grid client).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (default `30`).
    pub request_timeout_secs: u64,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

impl ServerConfig {
    /// Read every setting from the environment, panicking on values that
    /// do not parse. Misconfiguration should stop startup, not limp along.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:4200")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

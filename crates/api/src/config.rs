use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// against the mock employee API on port 8112.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8111`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Upstream employee API configuration.
    pub upstream: UpstreamConfig,
}

/// Where and how to reach the upstream employee API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL (default: `http://localhost:8112/api/v1`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
    /// Expiry of cached reads; `None` keeps them until a write invalidates
    /// them.
    pub cache_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `HOST`                   | `0.0.0.0`                        |
    /// | `PORT`                   | `8111`                           |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                             |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                             |
    /// | `UPSTREAM_BASE_URL`      | `http://localhost:8112/api/v1`   |
    /// | `UPSTREAM_TIMEOUT_SECS`  | `10`                             |
    /// | `EMPLOYEE_CACHE_TTL_SECS`| unset (no expiry)                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8111".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let upstream = UpstreamConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            upstream,
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8112/api/v1".into());

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let cache_ttl = std::env::var("EMPLOYEE_CACHE_TTL_SECS").ok().map(|v| {
            Duration::from_secs(
                v.parse()
                    .expect("EMPLOYEE_CACHE_TTL_SECS must be a valid u64"),
            )
        });

        Self {
            base_url,
            timeout_secs,
            cache_ttl,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

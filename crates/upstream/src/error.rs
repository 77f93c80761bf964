/// Errors from the upstream REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (network, DNS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered 429.
    #[error(
        "Too Many Requests. Please retry after: {}",
        .retry_after.as_deref().unwrap_or("unspecified")
    )]
    RateLimited {
        /// Raw `Retry-After` header value, if upstream sent one.
        retry_after: Option<String>,
    },

    /// Upstream answered with a 5xx status.
    #[error("Upstream server error ({status}): {body}")]
    Server {
        status: u16,
        /// Plain-text error body for debugging.
        body: String,
    },

    /// Upstream answered 404, or an envelope for a single record had no data.
    #[error("Upstream resource not found")]
    NotFound,

    /// Any other non-2xx status.
    #[error("Upstream API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// A 2xx envelope arrived without a `data` payload.
    #[error("Upstream returned no data for {0}")]
    MissingData(&'static str),
}

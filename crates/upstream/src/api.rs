//! REST API client for the upstream employee endpoints.
//!
//! Wraps `GET /employee`, `GET /employee/{id}`, `POST /employee` and the
//! name-keyed `DELETE /employee` using [`reqwest`]. Every response body is an
//! [`Envelope`]. No retries are attempted: rate-limit and server failures are
//! reported to the caller as typed errors.

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use roster_core::employee::{DeleteEmployeeRequest, Employee, EmployeeInput};
use roster_core::envelope::Envelope;
use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::source::EmployeeSource;

/// HTTP client for the upstream employee API.
#[derive(Clone)]
pub struct EmployeeApi {
    client: reqwest::Client,
    base_url: String,
}

impl EmployeeApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8112/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /employee`. A missing `data` payload yields an empty listing.
    pub async fn list_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/employee", self.base_url))
            .send()
            .await?;

        let envelope: Envelope<Vec<Employee>> =
            Self::parse_response(response, "fetching all employees").await?;
        Ok(envelope.into_data().unwrap_or_default())
    }

    /// `GET /employee/{id}`.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/employee/{}", self.base_url, id))
            .send()
            .await?;

        let envelope: Envelope<Employee> =
            Self::parse_response(response, "fetching employee by id").await?;
        envelope.into_data().ok_or(UpstreamError::NotFound)
    }

    /// `POST /employee`.
    pub async fn create(&self, input: &EmployeeInput) -> Result<Employee, UpstreamError> {
        let response = self
            .client
            .post(format!("{}/employee", self.base_url))
            .json(input)
            .send()
            .await?;

        let envelope: Envelope<Employee> =
            Self::parse_response(response, "creating employee").await?;
        envelope
            .into_data()
            .ok_or(UpstreamError::MissingData("create"))
    }

    /// `DELETE /employee` with a `{ "name" }` body.
    ///
    /// Upstream confirms with either a boolean or a string; both are
    /// returned as a string.
    pub async fn delete_by_name(&self, name: &str) -> Result<String, UpstreamError> {
        let body = DeleteEmployeeRequest {
            name: name.to_string(),
        };

        let response = self
            .client
            .delete(format!("{}/employee", self.base_url))
            .json(&body)
            .send()
            .await?;

        let envelope: Envelope<serde_json::Value> =
            Self::parse_response(response, "deleting employee").await?;
        match envelope.into_data() {
            Some(serde_json::Value::String(s)) => Ok(s),
            Some(serde_json::Value::Null) | None => Err(UpstreamError::MissingData("delete")),
            Some(other) => Ok(other.to_string()),
        }
    }

    // ---- private helpers ----

    /// Classify a non-2xx response into the matching [`UpstreamError`].
    /// Returns the response unchanged on success.
    async fn ensure_success(
        response: reqwest::Response,
        context: &'static str,
    ) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            tracing::warn!(
                context,
                retry_after = retry_after.as_deref().unwrap_or("unspecified"),
                "Upstream rate limit hit"
            );
            return Err(UpstreamError::RateLimited { retry_after });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        if status.is_server_error() {
            tracing::error!(context, status = status.as_u16(), body = %body, "Upstream server error");
            return Err(UpstreamError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &'static str,
    ) -> Result<T, UpstreamError> {
        let response = Self::ensure_success(response, context).await?;
        Ok(response.json::<T>().await?)
    }
}

impl EmployeeSource for EmployeeApi {
    async fn list_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        EmployeeApi::list_all(self).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
        EmployeeApi::get_by_id(self, id).await
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee, UpstreamError> {
        EmployeeApi::create(self, input).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<String, UpstreamError> {
        EmployeeApi::delete_by_name(self, name).await
    }
}

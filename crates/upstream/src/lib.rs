//! REST client for the upstream employee-data API.
//!
//! Provides the [`EmployeeSource`] seam used by the query service and
//! [`EmployeeApi`], its `reqwest`-backed implementation.

pub mod api;
pub mod error;
pub mod source;

pub use api::EmployeeApi;
pub use error::UpstreamError;
pub use source::EmployeeSource;

use roster_core::employee::{Employee, EmployeeInput};

use crate::error::UpstreamError;

/// Backing store of employee records.
///
/// Implemented by [`EmployeeApi`](crate::EmployeeApi) for the real upstream
/// service; tests substitute in-memory sources.
pub trait EmployeeSource: Send + Sync {
    /// Fetch the full employee listing.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, UpstreamError>> + Send;

    /// Fetch a single employee. `id` is passed through unmodified.
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Employee, UpstreamError>> + Send;

    /// Create an employee from an already-validated input.
    fn create(
        &self,
        input: &EmployeeInput,
    ) -> impl std::future::Future<Output = Result<Employee, UpstreamError>> + Send;

    /// Delete an employee by name; returns upstream's confirmation.
    fn delete_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<String, UpstreamError>> + Send;
}

use std::sync::Arc;

use crate::service::EmployeeService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Employee queries backed by the upstream API.
    pub employees: Arc<EmployeeService>,
}

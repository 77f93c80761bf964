pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employee                                        list, create
/// /employee/search/{term}                          name search
/// /employee/highestSalary                          highest salary
/// /employee/topTenHighestEarningEmployeeNames      top ten earner names
/// /employee/{id}                                   get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/employee", employee::router())
}

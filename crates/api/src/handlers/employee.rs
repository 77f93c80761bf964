//! Handlers for the employee endpoints.
//!
//! Each handler calls exactly one [`EmployeeService`](crate::service::EmployeeService)
//! operation and returns its result as the JSON body. Failures are rendered
//! by [`AppError`](crate::error::AppError).

use axum::extract::{Path, State};
use axum::Json;
use roster_core::employee::{Employee, EmployeeInput};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/v1/employee
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/search/{term}
///
/// Case-sensitive substring match on the employee name.
pub async fn search_employees(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_employee_by_name_search(&term).await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get_employee_by_id(&id).await?;
    Ok(Json(employee))
}

/// GET /api/v1/employee/highestSalary
pub async fn highest_salary(State(state): State<AppState>) -> AppResult<Json<i64>> {
    let salary = state.employees.get_highest_salary_of_employees().await?;
    Ok(Json(salary))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_ten_earner_names(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let names = state
        .employees
        .get_top_ten_highest_earning_employee_names()
        .await?;
    Ok(Json(names))
}

/// POST /api/v1/employee
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.create_employee(&input).await?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employee/{id}
///
/// Returns upstream's delete confirmation.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    let confirmation = state.employees.delete_employee_by_id(&id).await?;
    Ok(Json(confirmation))
}

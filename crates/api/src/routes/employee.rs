use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Employee routes mounted at `/employee`.
///
/// Static segments win over `{id}`, so `highestSalary` and
/// `topTenHighestEarningEmployeeNames` never reach the id handlers.
///
/// ```text
/// GET    /                                   -> list_employees
/// POST   /                                   -> create_employee
/// GET    /search/{term}                      -> search_employees
/// GET    /highestSalary                      -> highest_salary
/// GET    /topTenHighestEarningEmployeeNames  -> top_ten_earner_names
/// GET    /{id}                               -> get_employee
/// DELETE /{id}                               -> delete_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route("/search/{term}", get(employee::search_employees))
        .route("/highestSalary", get(employee::highest_salary))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(employee::top_ten_earner_names),
        )
        .route(
            "/{id}",
            get(employee::get_employee).delete(employee::delete_employee),
        )
}

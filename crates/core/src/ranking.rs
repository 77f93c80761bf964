//! Derived read-only views over an employee listing.
//!
//! Pure logic: the caller fetches the listing and passes it in.

use crate::employee::Employee;

/// Number of names returned by the top-earners view.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `query` (case-sensitive), in source order.
pub fn search_by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| e.name.contains(query))
        .cloned()
        .collect()
}

/// Highest salary in the listing, or 0 when it is empty.
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best-paid employees, highest salary first.
///
/// Ties keep their listing order.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}

/// Find an employee by exact id.
pub fn find_by_id<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}

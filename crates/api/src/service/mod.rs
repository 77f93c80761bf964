//! Employee query service.
//!
//! Sits between the HTTP handlers and the upstream client. Reads go through
//! an owned cache; search, highest-salary and top-earner views are computed
//! from the cached full listing with the pure functions in
//! [`roster_core::ranking`].

pub mod cache;

use std::sync::Arc;
use std::time::Duration;

use roster_core::employee::{validate_employee_input, Employee, EmployeeInput};
use roster_core::error::CoreError;
use roster_core::identifier::parse_employee_id;
use roster_core::ranking::{
    find_by_id, highest_salary, search_by_name, top_earner_names, TOP_EARNERS_LIMIT,
};
use roster_upstream::{EmployeeApi, EmployeeSource, UpstreamError};

use crate::error::{AppError, AppResult};
use cache::{CacheSlot, KeyedCache};

/// Entity label used in not-found errors.
const EMPLOYEE_ENTITY: &str = "Employee";

/// Query and mutation operations over the upstream employee data.
pub struct EmployeeService<S = EmployeeApi> {
    source: S,
    /// The full listing ("employees" slot).
    all: CacheSlot<Arc<Vec<Employee>>>,
    /// Single-record lookups keyed by id.
    by_id: KeyedCache<Employee>,
}

impl<S: EmployeeSource> EmployeeService<S> {
    /// Create a service over `source`. `cache_ttl` of `None` keeps cached
    /// reads until a create or delete invalidates them.
    pub fn new(source: S, cache_ttl: Option<Duration>) -> Self {
        Self {
            source,
            all: CacheSlot::new(cache_ttl),
            by_id: KeyedCache::new(cache_ttl),
        }
    }

    /// All employees, in upstream order.
    pub async fn get_all_employees(&self) -> AppResult<Vec<Employee>> {
        let employees = self.all_employees().await?;
        Ok(employees.as_ref().clone())
    }

    /// A single employee by id.
    ///
    /// Malformed ids are rejected before any upstream call.
    pub async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee> {
        parse_employee_id(id)?;

        self.by_id
            .get_or_try_load(id, || async {
                tracing::debug!(id, "Loading employee from upstream");
                self.source.get_by_id(id).await
            })
            .await
            .map_err(|err| match err {
                UpstreamError::NotFound => AppError::Core(CoreError::NotFound {
                    entity: EMPLOYEE_ENTITY,
                    id: id.to_string(),
                }),
                other => AppError::Upstream(other),
            })
    }

    /// Employees whose name contains `query` (case-sensitive).
    pub async fn get_employee_by_name_search(&self, query: &str) -> AppResult<Vec<Employee>> {
        let employees = self.all_employees().await?;
        Ok(search_by_name(&employees, query))
    }

    /// Highest salary across all employees, 0 when there are none.
    pub async fn get_highest_salary_of_employees(&self) -> AppResult<i64> {
        let employees = self.all_employees().await?;
        Ok(highest_salary(&employees))
    }

    /// Names of the ten best-paid employees, highest first.
    pub async fn get_top_ten_highest_earning_employee_names(&self) -> AppResult<Vec<String>> {
        let employees = self.all_employees().await?;
        Ok(top_earner_names(&employees, TOP_EARNERS_LIMIT))
    }

    /// Validate `input` and create the employee upstream.
    pub async fn create_employee(&self, input: &EmployeeInput) -> AppResult<Employee> {
        validate_employee_input(input)?;

        let created = self.source.create(input).await?;
        tracing::info!(id = %created.id, name = %created.name, "Employee created");

        self.invalidate().await;
        Ok(created)
    }

    /// Delete the employee with `id`.
    ///
    /// Upstream deletes by name, so the id is first resolved against the
    /// full listing. An unknown id fails without issuing a delete.
    pub async fn delete_employee_by_id(&self, id: &str) -> AppResult<String> {
        let employees = self.all_employees().await?;
        let target = find_by_id(&employees, id).ok_or_else(|| CoreError::NotFound {
            entity: EMPLOYEE_ENTITY,
            id: id.to_string(),
        })?;

        let confirmation = self.source.delete_by_name(&target.name).await?;
        tracing::info!(id, name = %target.name, "Employee deleted");

        self.invalidate().await;
        Ok(confirmation)
    }

    /// Drop every cached read.
    pub async fn invalidate(&self) {
        self.all.invalidate().await;
        self.by_id.clear().await;
    }

    async fn all_employees(&self) -> Result<Arc<Vec<Employee>>, UpstreamError> {
        self.all
            .get_or_try_load(|| async {
                tracing::debug!("Loading employee listing from upstream");
                self.source.list_all().await.map(Arc::new)
            })
            .await
    }
}

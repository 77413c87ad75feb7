use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::db::EmployeeStore;
use crate::models::employee::{Employee, EmployeeFilter};

/// Store fake for handler tests. Either serves a fixed set of rows or fails every call.
pub struct InMemoryEmployeeStore {
    employees: Vec<Employee>,
    failing: bool,
    calls: AtomicUsize,
}

impl InMemoryEmployeeStore {
    pub fn new(employees: Vec<Employee>) -> Self {
        InMemoryEmployeeStore {
            employees,
            failing: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        InMemoryEmployeeStore {
            employees: Vec::new(),
            failing: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, sqlx::Error> {
        self.record_call()?;
        Ok(self
            .employees
            .iter()
            .filter(|employee| filter.matches(employee))
            .cloned()
            .collect())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Option<Employee>, sqlx::Error> {
        self.record_call()?;
        Ok(self.employees.iter().find(|employee| employee.tag == tag).cloned())
    }
}

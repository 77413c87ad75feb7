use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::config::Config;
use crate::models::employee::{Employee, EmployeeFilter};

pub mod employee;
#[cfg(test)]
pub mod memory;

pub use employee::PgEmployeeStore;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    // An empty filter reads the whole table.
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, sqlx::Error>;

    async fn find_by_tag(&self, tag: &str) -> Result<Option<Employee>, sqlx::Error>;
}

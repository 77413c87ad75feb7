use async_trait::async_trait;
use sqlx::PgPool;
use crate::db::EmployeeStore;
use crate::models::employee::{Employee, EmployeeFilter};

const EMPLOYEE_COLUMNS: &str =
    "employee_id, tag, position, type, first_name, last_name, email, created_at, updated_at";

#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, sqlx::Error> {
        let mut query_builder: sqlx::QueryBuilder<'_, sqlx::Postgres> =
            sqlx::QueryBuilder::new(format!("SELECT {} FROM employees", EMPLOYEE_COLUMNS));

        if !filter.is_empty() {
            query_builder.push(" WHERE type = ANY(");
            query_builder.push_bind(filter.types.clone());
            query_builder.push(")");
        }

        query_builder
            .build_query_as::<Employee>()
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {} FROM employees WHERE tag = $1 LIMIT 1", EMPLOYEE_COLUMNS);

        sqlx::query_as::<_, Employee>(&sql)
            .bind(tag)
            .fetch_optional(&self.pool)
            .await
    }
}

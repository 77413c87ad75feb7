use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[sqlx(type_name = "employee_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    FullTime,
    PartTime,
    Contractor,
    Intern,
}

impl sqlx::postgres::PgHasArrayType for EmployeeType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_employee_type")
    }
}

impl FromStr for EmployeeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(EmployeeType::FullTime),
            "part_time" => Ok(EmployeeType::PartTime),
            "contractor" => Ok(EmployeeType::Contractor),
            "intern" => Ok(EmployeeType::Intern),
            other => Err(format!("Unknown employee type: {}", other)),
        }
    }
}

/// Row of the `employees` table. `tag` is the only identifier that leaves the service.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Employee {
    pub employee_id: Uuid,
    pub tag: String,
    pub position: String,
    #[sqlx(rename = "type")]
    pub employee_type: EmployeeType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicEmployee {
    pub id: String,
    pub position: String,
    #[serde(rename = "type")]
    pub employee_type: EmployeeType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for PublicEmployee {
    fn from(employee: Employee) -> Self {
        PublicEmployee {
            id: employee.tag,
            position: employee.position,
            employee_type: employee.employee_type,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub has_more: bool,
    pub data: Vec<PublicEmployee>,
}

/// Filter handed to the store. An empty `types` list means no filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub types: Vec<EmployeeType>,
}

impl EmployeeFilter {
    pub fn by_types(types: Vec<EmployeeType>) -> Self {
        EmployeeFilter { types }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[cfg(test)]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.is_empty() || self.types.contains(&employee.employee_type)
    }
}

//! Repository for the `employee` table.

use sqlx::PgPool;
use tender_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee};

const COLUMNS: &str = "id, username, first_name, last_name, created_at, updated_at";

/// Provides create and lookup operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee. Duplicate usernames violate `uq_employee_username`.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee (username, first_name, last_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

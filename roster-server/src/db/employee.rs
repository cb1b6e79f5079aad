//! Employee table operations
//!
//! Each function issues exactly one parameterized statement against the
//! pre-existing `employees(id, name, employee_id, email)` table and is
//! auto-committed. Mutations report rows affected so the caller can map
//! zero to a not-found response.

use shared::models::{Employee, EmployeeFields};
use sqlx::PgPool;

/// List all employees; row order is storage-determined.
pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, employee_id, email FROM employees")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, employee_id, email FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, fields: &EmployeeFields) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO employees (name, employee_id, email) VALUES ($1, $2, $3)")
        .bind(&fields.name)
        .bind(&fields.employee_id)
        .bind(&fields.email)
        .execute(pool)
        .await?;
    Ok(())
}

/// Replace all three mutable fields in a single statement.
pub async fn update(pool: &PgPool, id: i64, fields: &EmployeeFields) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE employees SET name = $1, employee_id = $2, email = $3 WHERE id = $4")
            .bind(&fields.name)
            .bind(&fields.employee_id)
            .bind(&fields.email)
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

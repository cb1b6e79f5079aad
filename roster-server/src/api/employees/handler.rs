//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::error::AppError;
use shared::models::{Employee, EmployeePayload};
use shared::response::ApiResponse;

use crate::db::employee;
use crate::state::AppState;

const RESOURCE: &str = "Employee";

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// List all employees
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = employee::list(&state.pool).await?;
    Ok(Json(ApiResponse::success(employees)))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<()> {
    let fields = payload.validate()?;
    employee::insert(&state.pool, &fields).await?;
    Ok(Json(ApiResponse::message("Employee added successfully")))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Employee> {
    let found = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(ApiResponse::success(found)))
}

/// Update an employee, replacing all three mutable fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<()> {
    let fields = payload.validate()?;
    let affected = employee::update(&state.pool, id, &fields).await?;
    if affected == 0 {
        return Err(AppError::not_found(RESOURCE));
    }
    Ok(Json(ApiResponse::message("Employee updated successfully")))
}

/// Delete an employee
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    let affected = employee::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::not_found(RESOURCE));
    }
    Ok(Json(ApiResponse::message("Employee deleted successfully")))
}

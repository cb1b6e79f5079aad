//! Employee Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A stored employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    /// Database-generated primary key, immutable
    pub id: i64,
    pub name: String,
    /// Badge identifier; duplicates are permitted
    pub employee_id: String,
    pub email: String,
}

/// Create/update payload as it arrives on the wire.
///
/// Every field is optional at the serde layer so absence reaches the
/// presence check instead of failing deserialization; [`Self::validate`]
/// is the API-boundary enforcement of the non-null invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub employee_id: Option<String>,
    pub email: Option<String>,
}

/// Validated field set ready for insert/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub employee_id: String,
    pub email: String,
}

impl EmployeePayload {
    /// Presence check: every field must be present and non-blank.
    /// A blank field counts as missing, matching the client's
    /// "fill in all fields" behavior.
    pub fn validate(self) -> Result<EmployeeFields, AppError> {
        Ok(EmployeeFields {
            name: require(self.name, "name")?,
            employee_id: require(self.employee_id, "employee_id")?,
            email: require(self.email, "email")?,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

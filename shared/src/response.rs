//! API response envelope
//!
//! Successful responses follow one of two shapes:
//! ```json
//! {"status": "success", "data": ...}
//! {"status": "success", "message": "..."}
//! ```
//! Failures use the error body produced by [`crate::error::AppError`].

use serde::{Deserialize, Serialize};

/// Status string carried by every successful response
pub const STATUS_SUCCESS: &str = "success";

/// Unified success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `"success"`
    pub status: String,
    /// Response payload (collection or single record reads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable acknowledgment (mutations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Success response carrying data
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success acknowledgment carrying a message and no data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_status_and_data() {
        let json = serde_json::to_string(&ApiResponse::success(vec![1, 2, 3])).unwrap();
        assert_eq!(json, r#"{"status":"success","data":[1,2,3]}"#);
    }

    #[test]
    fn message_omits_data() {
        let json = serde_json::to_string(&ApiResponse::message("Employee added successfully"))
            .unwrap();
        assert_eq!(
            json,
            r#"{"status":"success","message":"Employee added successfully"}"#
        );
    }

    #[test]
    fn deserializes_data_envelope() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_str(r#"{"status":"success","data":[7]}"#).unwrap();
        assert_eq!(resp.status, STATUS_SUCCESS);
        assert_eq!(resp.data, Some(vec![7]));
        assert!(resp.message.is_none());
    }
}

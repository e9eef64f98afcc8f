//! JSON response bodies.
//!
//! Application-level failures are still `200 OK`; the `status` field carries
//! the outcome and `message` a user-facing explanation.

use serde::Serialize;

/// `{"status": ..., "message"?: ..., "employee_id"?: ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReply {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl StatusReply {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: None,
            employee_id: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: Some(message.into()),
            employee_id: None,
        }
    }

    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
            employee_id: None,
        }
    }

    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }
}

/// Assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskReply {
    pub reply: String,
}

/// The logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeReply {
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_reply_shapes() {
        assert_eq!(
            serde_json::to_value(StatusReply::success()).unwrap(),
            json!({"status": "success"})
        );
        assert_eq!(
            serde_json::to_value(StatusReply::fail("nope")).unwrap(),
            json!({"status": "fail", "message": "nope"})
        );
        assert_eq!(
            serde_json::to_value(StatusReply::success().with_employee_id("EMP000002")).unwrap(),
            json!({"status": "success", "employee_id": "EMP000002"})
        );
    }
}

//! Structured outcome of a mutating engine operation.

use serde::{Deserialize, Serialize};

/// Outcome of a mutating operation.
///
/// Every mutating engine call returns one of these; failures are captured
/// and reported here rather than propagated. Destructive operations report
/// their attempted outcome without guaranteeing the underlying resource is
/// actually gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
}

impl OperationResult {
    /// A successful result with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed result with the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OperationResult {{ success: {}, message: '{}' }}",
            self.success, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_constructors() {
        let ok = OperationResult::ok("done");
        assert!(ok.is_success());
        assert_eq!(ok.message, "done");

        let fail = OperationResult::fail("broken");
        assert!(!fail.is_success());
        assert_eq!(fail.message, "broken");
    }

    #[test]
    fn test_operation_result_serializes_camel_case() {
        let json = serde_json::to_string(&OperationResult::ok("done")).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"done"}"#);
    }
}

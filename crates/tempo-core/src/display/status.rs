//! One-line outcome messages for operations with nothing else to show.

use std::fmt;

use serde::Serialize;

/// A success or refusal message.
#[derive(Debug, Clone, Serialize)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_labels() {
        let refused = OperationStatus::failure("Deletion of goal 3 requires confirmation");
        assert_eq!(
            refused.to_string(),
            "Error: Deletion of goal 3 requires confirmation\n"
        );
        assert!(OperationStatus::success("done").to_string().starts_with("Success:"));
    }
}

use serde::Serialize;
use std::fmt;

/// Queryable state of a previously issued transaction.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Declared for backends that settle asynchronously; the in-memory
    /// reference gateway never produces it.
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "PENDING"),
            TransactionStatus::Completed => write!(f, "COMPLETED"),
            TransactionStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Outcome of a single gateway operation, successful or not.
///
/// Created fresh on every operation and never mutated. `message` is empty on
/// success and carries the failure text otherwise.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct TransactionResult {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

impl TransactionResult {
    pub fn ok(transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: transaction_id.into(),
            message: String::new(),
        }
    }

    pub fn failed(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: transaction_id.into(),
            message: message.into(),
        }
    }
}

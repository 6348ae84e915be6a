use thiserror::Error;

/// Operational failures a payment backend may raise during an otherwise
/// well-formed request.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("payment declined: {0}")]
    Declined(String),
    #[error("refund rejected: {0}")]
    Refund(String),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("user id cannot be empty")]
    EmptyUserId,
    #[error("transaction id cannot be empty")]
    EmptyTransactionId,
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl PaymentError {
    /// True for caller contract violations, false for faults that originated
    /// inside a gateway.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, PaymentError::Gateway(_))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;

use super::transaction::{TransactionResult, TransactionStatus};
use crate::error::GatewayError;
use rust_decimal::Decimal;

/// Capability set any payment backend must expose.
///
/// A backend may report an operational failure either as `Ok` with
/// `success == false` or as a `GatewayError`; the processor folds both into
/// the same result shape for charge and refund.
pub trait PaymentGateway: Send + Sync {
    /// Attempts to charge `user_id` for `amount`. Input validation is the
    /// caller's concern, not the backend's.
    fn charge(&self, user_id: &str, amount: Decimal) -> Result<TransactionResult, GatewayError>;

    /// Attempts to reverse the charge identified by `transaction_id`.
    fn refund(&self, transaction_id: &str) -> Result<TransactionResult, GatewayError>;

    /// Current status of `transaction_id`. An id the backend has never seen
    /// resolves to `TransactionStatus::Failed`, not an error.
    fn status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;

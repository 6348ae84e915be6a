use crate::domain::ports::PaymentGatewayBox;
use crate::domain::transaction::{TransactionResult, TransactionStatus};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// The main entry point for payment operations.
///
/// `PaymentProcessor` validates caller input before the gateway is consulted
/// and folds gateway faults on charge and refund into a failed
/// `TransactionResult`, so callers branch on `success` instead of handling
/// backend errors themselves.
pub struct PaymentProcessor {
    gateway: PaymentGatewayBox,
}

impl PaymentProcessor {
    /// Creates a processor backed by the given gateway.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    /// Charges `user_id` for `amount`.
    ///
    /// # Errors
    ///
    /// Returns a contract-violation error when `amount` is not positive or
    /// `user_id` is empty; the gateway is not invoked in either case.
    pub fn process_payment(&self, user_id: &str, amount: Decimal) -> Result<TransactionResult> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount);
        }
        if user_id.is_empty() {
            return Err(PaymentError::EmptyUserId);
        }

        tracing::debug!(user_id, %amount, "charging");
        match self.gateway.charge(user_id, amount) {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::warn!(%err, "charge failed at gateway");
                Ok(TransactionResult::failed("", err.to_string()))
            }
        }
    }

    /// Reverses the charge identified by `transaction_id`.
    ///
    /// # Errors
    ///
    /// Returns a contract-violation error when `transaction_id` is empty; the
    /// gateway is not invoked in that case.
    pub fn refund_payment(&self, transaction_id: &str) -> Result<TransactionResult> {
        if transaction_id.is_empty() {
            return Err(PaymentError::EmptyTransactionId);
        }

        tracing::debug!(transaction_id, "refunding");
        match self.gateway.refund(transaction_id) {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::warn!(%err, "refund failed at gateway");
                Ok(TransactionResult::failed("", err.to_string()))
            }
        }
    }

    /// Current status of `transaction_id`.
    ///
    /// Unlike charge and refund, a gateway fault here is not absorbed: it
    /// surfaces as `PaymentError::Gateway`.
    ///
    /// # Errors
    ///
    /// Returns a contract-violation error when `transaction_id` is empty, or
    /// the gateway's own error if the status lookup fails.
    pub fn payment_status(&self, transaction_id: &str) -> Result<TransactionStatus> {
        if transaction_id.is_empty() {
            return Err(PaymentError::EmptyTransactionId);
        }

        Ok(self.gateway.status(transaction_id)?)
    }
}

use crate::domain::ports::PaymentGateway;
use crate::domain::transaction::{TransactionResult, TransactionStatus};
use crate::error::GatewayError;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq)]
struct ChargeRecord {
    user_id: String,
    amount: Decimal,
}

#[derive(Default)]
struct GatewayState {
    counter: u64,
    charges: HashMap<String, ChargeRecord>,
}

/// A thread-safe in-memory payment gateway.
///
/// Transaction ids are `"txn1"`, `"txn2"`, … from a counter that is never
/// reset, so ids stay unique for the lifetime of the instance. A single mutex
/// guards both the counter and the charge map, keeping charge's
/// increment-then-insert atomic under concurrent callers.
/// Ideal for testing; stands in for a real network-backed gateway.
#[derive(Default)]
pub struct InMemoryGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryGateway {
    /// Creates a new, empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, GatewayState> {
        // Every operation leaves the map consistent, so a poisoned lock is
        // still safe to reuse.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentGateway for InMemoryGateway {
    /// Always succeeds. Validation belongs to the processor, not here.
    fn charge(&self, user_id: &str, amount: Decimal) -> Result<TransactionResult, GatewayError> {
        let mut state = self.state();
        state.counter += 1;
        let transaction_id = format!("txn{}", state.counter);
        state.charges.insert(
            transaction_id.clone(),
            ChargeRecord {
                user_id: user_id.to_string(),
                amount,
            },
        );
        Ok(TransactionResult::ok(transaction_id))
    }

    /// Removes the charge, so an id can be refunded at most once.
    fn refund(&self, transaction_id: &str) -> Result<TransactionResult, GatewayError> {
        let mut state = self.state();
        if state.charges.remove(transaction_id).is_some() {
            Ok(TransactionResult::ok(transaction_id))
        } else {
            Ok(TransactionResult::failed(
                transaction_id,
                "Transaction not found.",
            ))
        }
    }

    /// Presence in the store is the only status signal, so a refunded id
    /// reports `Failed` just like one that was never issued.
    fn status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        let state = self.state();
        if state.charges.contains_key(transaction_id) {
            Ok(TransactionStatus::Completed)
        } else {
            Ok(TransactionStatus::Failed)
        }
    }
}

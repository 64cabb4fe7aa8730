use super::entity::Balance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record of a single transaction: the amount, the fee taken and the balance
/// the entity holds once the transaction commits.
///
/// Doubles as the callback payload and the notification content.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TransactionReceipt {
    pub identifier: String,
    pub amount: Decimal,
    pub fee: Decimal,
    pub balance: Balance,
}

/// Outcome of a transaction. A failed callback is a business outcome, not an
/// error: the caller never sees it as a failure of the operation itself.
#[derive(Debug, PartialEq, Clone)]
pub enum TransactionOutcome {
    /// The callback succeeded and the new balance was committed.
    Committed(TransactionReceipt),
    /// The callback failed; the balance was left untouched.
    Rejected { amount: Decimal },
}

impl TransactionOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

use super::fees::FeePolicyBox;
use super::ports::{CallbackChannelBox, NotificationChannelBox};
use super::receipt::{TransactionOutcome, TransactionReceipt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Monetary balance held by an entity.
///
/// Wrapper around `rust_decimal::Decimal`. Balances carry no sign invariant:
/// fees and amounts apply without bound checks, so a balance may go negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A balance-holding party (company or individual client).
///
/// The fee policy and both outbound channels are supplied at construction;
/// behavior is configured through them rather than through subtyping. The
/// balance starts at zero and is written only by a committed transaction.
pub struct FinancialEntity {
    identifier: String,
    balance: Balance,
    fee_policy: FeePolicyBox,
    callback: CallbackChannelBox,
    notifier: NotificationChannelBox,
}

impl FinancialEntity {
    /// Creates an entity with a zero starting balance.
    ///
    /// The identifier is a tax ID in personal or company form. Its format is
    /// not validated; arbitrary strings are accepted.
    pub fn new(
        identifier: impl Into<String>,
        fee_policy: FeePolicyBox,
        callback: CallbackChannelBox,
        notifier: NotificationChannelBox,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            balance: Balance::ZERO,
            fee_policy,
            callback,
            notifier,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Runs one transaction against this entity.
    ///
    /// The fee and the resulting balance are computed up front, then the
    /// callback is attempted exactly once and acts as the commit barrier:
    /// only a successful callback writes the new balance and triggers the
    /// notification. On failure the computed balance is discarded and the
    /// stored balance stays as it was.
    pub async fn perform_transaction(&mut self, amount: Decimal) -> TransactionOutcome {
        let fee = self.fee_policy.compute(amount);
        let proposed = self.balance + Balance::new(amount) - Balance::new(fee);
        let receipt = TransactionReceipt {
            identifier: self.identifier.clone(),
            amount,
            fee,
            balance: proposed,
        };

        if self.send_callback(&receipt).await {
            self.balance = proposed;
            self.notifier.notify(&receipt).await;
            TransactionOutcome::Committed(receipt)
        } else {
            TransactionOutcome::Rejected { amount }
        }
    }

    /// Translates any channel error into a failed delivery. Failures never
    /// escape past this point.
    async fn send_callback(&self, receipt: &TransactionReceipt) -> bool {
        match self.callback.send(receipt).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    identifier = %self.identifier,
                    error = %e,
                    "callback failed, transaction not completed"
                );
                false
            }
        }
    }
}

/// An individual client: a `FinancialEntity` keyed by the client's personal
/// tax ID, which is also recorded under its own label.
pub struct Client {
    entity: FinancialEntity,
    personal_id: String,
}

impl Client {
    pub fn new(
        personal_id: impl Into<String>,
        fee_policy: FeePolicyBox,
        callback: CallbackChannelBox,
        notifier: NotificationChannelBox,
    ) -> Self {
        let personal_id = personal_id.into();
        Self {
            entity: FinancialEntity::new(personal_id.clone(), fee_policy, callback, notifier),
            personal_id,
        }
    }

    /// The personal tax ID this client was registered with.
    pub fn personal_id(&self) -> &str {
        &self.personal_id
    }

    pub fn identifier(&self) -> &str {
        self.entity.identifier()
    }

    pub fn balance(&self) -> Balance {
        self.entity.balance()
    }

    pub async fn perform_transaction(&mut self, amount: Decimal) -> TransactionOutcome {
        self.entity.perform_transaction(amount).await
    }
}

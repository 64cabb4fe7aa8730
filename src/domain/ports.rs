use super::receipt::TransactionReceipt;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound channel reporting a transaction to an external receiver.
///
/// Its result gates whether the transaction commits. Implementations may fail;
/// the entity translates any error into a failed delivery at its own boundary.
#[async_trait]
pub trait CallbackChannel: Send + Sync {
    async fn send(&self, receipt: &TransactionReceipt) -> Result<()>;
}

/// Channel delivering the success notification for a committed transaction.
///
/// Side-effect only: it is invoked exactly once per commit, after the balance
/// update, and cannot fail.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn notify(&self, receipt: &TransactionReceipt);
}

pub type CallbackChannelBox = Box<dyn CallbackChannel>;
pub type NotificationChannelBox = Box<dyn NotificationChannel>;

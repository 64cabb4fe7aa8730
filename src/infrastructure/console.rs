use crate::domain::ports::NotificationChannel;
use crate::domain::receipt::TransactionReceipt;
use async_trait::async_trait;

/// Writes the success notification to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl NotificationChannel for ConsoleNotifier {
    async fn notify(&self, receipt: &TransactionReceipt) {
        println!(
            "Notification for {}: transaction completed successfully. Current balance: {}",
            receipt.identifier, receipt.balance
        );
    }
}

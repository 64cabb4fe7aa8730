use async_trait::async_trait;
use feegate::domain::ports::{CallbackChannel, NotificationChannel};
use feegate::domain::receipt::TransactionReceipt;
use feegate::error::{EngineError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Callback double with a scripted result, counting every delivery attempt.
pub struct ScriptedCallback {
    succeed: bool,
    calls: Arc<AtomicUsize>,
}

impl ScriptedCallback {
    pub fn succeeding() -> (Self, Arc<AtomicUsize>) {
        Self::with_result(true)
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        Self::with_result(false)
    }

    fn with_result(succeed: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                succeed,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl CallbackChannel for ScriptedCallback {
    async fn send(&self, _receipt: &TransactionReceipt) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(())
        } else {
            Err(EngineError::Callback("scripted failure".to_string()))
        }
    }
}

/// Notifier double recording every receipt it is handed.
pub struct RecordingNotifier {
    receipts: Arc<RwLock<Vec<TransactionReceipt>>>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, Arc<RwLock<Vec<TransactionReceipt>>>) {
        let receipts = Arc::new(RwLock::new(Vec::new()));
        (
            Self {
                receipts: receipts.clone(),
            },
            receipts,
        )
    }
}

#[async_trait]
impl NotificationChannel for RecordingNotifier {
    async fn notify(&self, receipt: &TransactionReceipt) {
        self.receipts.write().await.push(receipt.clone());
    }
}

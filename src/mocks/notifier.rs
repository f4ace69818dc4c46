use crate::external::{DeliveryResult, Notifier};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock notifier.
///
/// Records every `(contact, text)` pair and answers with a fixed result.
#[derive(Debug)]
pub struct MockNotifier {
    result: DeliveryResult,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    /// Mock that reports successful delivery.
    pub fn delivered() -> Self {
        Self::with_result(DeliveryResult::Delivered {
            response: "ok".to_string(),
        })
    }

    /// Mock that reports a transport failure.
    pub fn failing(error: &str) -> Self {
        Self::with_result(DeliveryResult::Failed {
            error: error.to_string(),
        })
    }

    pub fn with_result(result: DeliveryResult) -> Self {
        Self {
            result,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, contact: &str, text: &str) -> DeliveryResult {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((contact.to_string(), text.to_string()));
        }
        self.result.clone()
    }
}

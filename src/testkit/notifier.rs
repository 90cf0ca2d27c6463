//! Notifier test double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DeliveryError, Result};
use crate::port::outbound::notifier::Notifier;

/// Records every delivered message. A failing instance rejects every send
/// but still counts the attempt.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Successfully delivered messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, text: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 400,
                body: "Bad Request: chat not found".into(),
            }
            .into());
        }
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(text.to_string());
        Ok(())
    }
}

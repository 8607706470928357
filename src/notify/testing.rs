//! Scripted notifier for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

use super::{Delivery, Notifier, NotifyError, OutboundEmail};

/// Records every attempt and fails for selected recipients.
///
/// With a gate, each send waits for a semaphore permit before answering,
/// which lets a test hold a dispatch in flight.
#[derive(Default)]
pub(crate) struct ScriptedNotifier {
    attempts: Mutex<Vec<OutboundEmail>>,
    failures: Mutex<HashMap<String, NotifyError>>,
    calls: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
    started: Arc<Notify>,
}

impl ScriptedNotifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Signalled when the first send starts
    pub(crate) fn started(&self) -> Arc<Notify> {
        self.started.clone()
    }

    pub(crate) fn fail_for(&self, recipient: &str, error: NotifyError) {
        self.failures
            .lock()
            .unwrap()
            .insert(recipient.to_string(), error);
    }

    pub(crate) fn clear_failures(&self) {
        self.failures.lock().unwrap().clear();
    }

    pub(crate) fn attempts(&self) -> Vec<OutboundEmail> {
        self.attempts.lock().unwrap().clone()
    }

    pub(crate) fn attempts_for(&self, recipient: &str) -> usize {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.to_email == recipient)
            .count()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for ScriptedNotifier {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<Delivery, NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.attempts.lock().unwrap().push(email.clone());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let failure = self.failures.lock().unwrap().get(&email.to_email).cloned();
        match failure {
            Some(err) => Err(err),
            None => Ok(Delivery {
                recipient: email.to_email.clone(),
                status: 200,
            }),
        }
    }
}

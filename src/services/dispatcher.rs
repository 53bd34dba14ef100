//! Background delivery of contact messages
//!
//! Sends one message at a time on a worker thread and reports the outcome
//! through a channel that the app polls on every tick.

use crate::error::RelayError;
use crate::model::ContactMessage;
use crate::services::relay::MailRelay;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error};

/// Result of a finished delivery
#[derive(Debug)]
pub enum DeliveryOutcome {
    Sent,
    Failed(RelayError),
}

struct PendingDelivery {
    receiver: Receiver<Result<(), RelayError>>,
    started: Instant,
}

/// Runs relay sends off the UI thread
pub struct Dispatcher {
    relay: Arc<dyn MailRelay>,
    pending: Option<PendingDelivery>,
}

impl Dispatcher {
    pub fn new(relay: Arc<dyn MailRelay>) -> Self {
        Self {
            relay,
            pending: None,
        }
    }

    /// Whether a send is still in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start sending `message`; returns false if a send is already running
    pub fn dispatch(&mut self, message: ContactMessage) -> bool {
        if self.is_busy() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let relay = Arc::clone(&self.relay);

        thread::spawn(move || {
            let result = relay.send(&message);
            let _ = tx.send(result);
        });

        self.pending = Some(PendingDelivery {
            receiver: rx,
            started: Instant::now(),
        });
        true
    }

    /// Check for a finished send without blocking
    pub fn poll(&mut self) -> Option<DeliveryOutcome> {
        let pending = self.pending.as_ref()?;

        let outcome = match pending.receiver.try_recv() {
            Ok(Ok(())) => DeliveryOutcome::Sent,
            Ok(Err(e)) => {
                error!(error = %e, "contact message delivery failed");
                DeliveryOutcome::Failed(e)
            }
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                error!("relay worker exited without reporting");
                DeliveryOutcome::Failed(RelayError::Rejected {
                    status: 0,
                    body: "relay worker stopped".to_string(),
                })
            }
        };

        debug!(elapsed_ms = pending.started.elapsed().as_millis() as u64, "delivery finished");
        self.pending = None;
        Some(outcome)
    }
}

//! One-shot delayed wake-up for the heuristic's move.

use crate::controller::AutoMoveTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

/// Sends an [`AutoMoveTicket`] back to the event loop after a fixed delay.
///
/// At most one wake-up is pending. Scheduling again, cancelling, or
/// dropping the scheduler aborts the pending one. The timer task never
/// touches game state; whoever receives the ticket decides whether it
/// still applies. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct AutoMoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AutoMoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl AutoMoveScheduler {
    /// Creates a scheduler delivering tickets on `tx`.
    #[instrument(skip(tx))]
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AutoMoveTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Creates a scheduler together with the receiving end of its channel.
    pub fn channel(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AutoMoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(delay, tx), rx)
    }

    /// Replaces any pending wake-up with one for `ticket`.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: AutoMoveTicket) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Receiver dropped before auto move fired");
            }
        }));
        debug!("Auto move scheduled");
    }

    /// Aborts the pending wake-up, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending auto move");
            }
            handle.abort();
        }
    }

    /// True while a wake-up is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for AutoMoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Splash dwell timer
//!
//! Each entry into the splash screen gets a fresh [`SplashTicket`]. A firing
//! only takes effect if its ticket is still the armed one, so a timer that
//! outlives its splash entry cannot move the coordinator.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Identifies one entry into the splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplashTicket {
    pub epoch: u64,
}

/// Armed dwell for the current splash entry
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplashArm {
    pub ticket: SplashTicket,
    pub armed_at: Instant,
}

impl SplashArm {
    pub fn new(ticket: SplashTicket) -> Self {
        Self {
            ticket,
            armed_at: Instant::now(),
        }
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.armed_at)
    }
}

/// One-shot tokio timer that delivers a ticket after the dwell
///
/// Re-arming or dropping the timer aborts the pending firing.
#[derive(Debug, Default)]
pub struct SplashTimer {
    handle: Option<JoinHandle<()>>,
}

impl SplashTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `ticket` on `tx` once `dwell` has passed
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, ticket: SplashTicket, dwell: Duration, tx: mpsc::UnboundedSender<SplashTicket>) {
        self.cancel();
        debug!(epoch = ticket.epoch, dwell_ms = (dwell.as_millis() as u64), "splash timer armed");
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(dwell).await;
            let _ = tx.send(ticket);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("splash timer cancelled");
            }
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_delivers_ticket_after_dwell() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SplashTimer::new();
        let ticket = SplashTicket { epoch: 7 };

        timer.arm(ticket, Duration::from_millis(3000), tx);
        assert!(timer.is_armed());

        let start = tokio::time::Instant::now();
        assert_eq!(rx.recv().await, Some(ticket));
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SplashTimer::new();

        timer.arm(SplashTicket { epoch: 1 }, Duration::from_millis(3000), tx);
        timer.cancel();
        assert!(!timer.is_armed());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_pending_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SplashTimer::new();

        timer.arm(SplashTicket { epoch: 1 }, Duration::from_millis(3000), tx.clone());
        timer.arm(SplashTicket { epoch: 2 }, Duration::from_millis(3000), tx);

        assert_eq!(rx.recv().await, Some(SplashTicket { epoch: 2 }));
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}

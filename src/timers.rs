//! Scoped cosmetic timers
//!
//! Each timer is a tokio task bound to a cancellation token. The owning
//! screen keeps the [`ScopedTask`] handle; dropping the handle cancels the
//! task, so leaving a view stops every timer that view started. Timers only
//! send [`TimerEvent`] messages and never touch the answer record.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Capacity of the timer event channel
pub const TIMER_CHANNEL_CAPACITY: usize = 64;

/// Messages sent by timer tasks to the UI loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Loading progress advances one step
    LoadingTick,
    /// Offer countdown loses one second
    CountdownTick,
    /// Show the purchase popup for the buyer at this index
    PopupShow(usize),
    /// Hide the purchase popup
    PopupHide,
    /// Move the testimonial carousel forward
    CarouselAdvance,
}

/// Create the channel timer tasks report on
pub fn channel() -> (mpsc::Sender<TimerEvent>, mpsc::Receiver<TimerEvent>) {
    mpsc::channel(TIMER_CHANNEL_CAPACITY)
}

/// Handle to a spawned timer task, cancelled on drop
#[derive(Debug)]
pub struct ScopedTask {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ScopedTask {
    /// Spawn a cancel-aware task.
    ///
    /// The closure receives the task's token; the future should return once
    /// the token is cancelled.
    pub fn spawn<F, Fut>(task: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(task(cancel.clone()));
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Send `event` every `period`, starting one period from now
    pub fn interval(period: Duration, tx: mpsc::Sender<TimerEvent>, event: TimerEvent) -> Self {
        Self::spawn(move |cancel| async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                }
            }
            trace!(?event, "interval timer stopped");
        })
    }

    /// Stop the task
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the task has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Sleep for `duration` unless cancelled first; returns false on cancel
pub async fn sleep_or_cancel(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = time::sleep(duration) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_sends_events() {
        let (tx, mut rx) = channel();
        let _task = ScopedTask::interval(Duration::from_millis(80), tx, TimerEvent::LoadingTick);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(TimerEvent::LoadingTick));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let (tx, mut rx) = channel();
        let task = ScopedTask::interval(Duration::from_secs(1), tx, TimerEvent::CountdownTick);
        assert_eq!(rx.recv().await, Some(TimerEvent::CountdownTick));

        drop(task);
        // The sender lived inside the task, so the channel closes once it stops
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_marks_task() {
        let (tx, _rx) = channel();
        let mut task = ScopedTask::interval(Duration::from_secs(3), tx, TimerEvent::CarouselAdvance);
        assert!(!task.is_cancelled());
        task.cancel();
        assert!(task.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_or_cancel() {
        let cancel = CancellationToken::new();
        assert!(sleep_or_cancel(Duration::from_secs(1), &cancel).await);
        cancel.cancel();
        assert!(!sleep_or_cancel(Duration::from_secs(1), &cancel).await);
    }
}

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Periodic timer owned by a game session. At most one timer task is ever
/// live: `start` cancels the previous task before spawning the next, so
/// re-arming with a new period can never leave two timers running.
pub struct TickTask {
    handle: Option<JoinHandle<()>>,
}

impl Default for TickTask {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTask {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Arms the timer. Each period one `()` is sent into `tick_tx`; the first
    /// tick arrives one full period after this call. The task stops on its
    /// own when the receiver is dropped.
    pub fn start(&mut self, period: Duration, tick_tx: mpsc::UnboundedSender<()>) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval(period);
            // An interval yields its first tick immediately; skip it so the
            // initial delay equals the period.
            timer.tick().await;
            loop {
                timer.tick().await;
                if tick_tx.send(()).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_ticks_arrive_periodically() {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let mut task = TickTask::new();
        task.start(Duration::from_millis(10), tick_tx);

        for _ in 0..3 {
            timeout(Duration::from_millis(500), tick_rx.recv())
                .await
                .unwrap()
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_first_tick_waits_a_full_period() {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let mut task = TickTask::new();
        task.start(Duration::from_millis(200), tick_tx);

        let early = timeout(Duration::from_millis(50), tick_rx.recv()).await;
        assert!(early.is_err());
        task.cancel();
    }

    #[tokio::test]
    async fn test_cancel_stops_ticks_and_closes_channel() {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let mut task = TickTask::new();
        task.start(Duration::from_millis(10), tick_tx);

        timeout(Duration::from_millis(500), tick_rx.recv())
            .await
            .unwrap()
            .unwrap();
        task.cancel();

        // Draining ends with None once the aborted task drops the sender.
        let drained = timeout(Duration::from_millis(500), async {
            while tick_rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn test_restart_replaces_the_previous_timer() {
        let (slow_tx, mut slow_rx) = mpsc::unbounded_channel();
        let (fast_tx, mut fast_rx) = mpsc::unbounded_channel();
        let mut task = TickTask::new();
        task.start(Duration::from_secs(60), slow_tx);
        task.start(Duration::from_millis(10), fast_tx);

        timeout(Duration::from_millis(500), fast_rx.recv())
            .await
            .unwrap()
            .unwrap();
        // The first timer was aborted, so its channel closes without a tick.
        assert_eq!(slow_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_is_armed_lifecycle() {
        let (tick_tx, _tick_rx) = mpsc::unbounded_channel();
        let mut task = TickTask::new();
        assert!(!task.is_armed());
        task.start(Duration::from_millis(10), tick_tx);
        assert!(task.is_armed());
        task.cancel();
        assert!(!task.is_armed());
    }
}

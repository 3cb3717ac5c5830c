use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a notification stays open unless dismissed first.
pub const AUTO_HIDE: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Transient feedback shown after a submission. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

#[derive(Default)]
struct Slot {
    current: Notification,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Holds the current notification and closes it after [`AUTO_HIDE`].
///
/// Showing a new notification or dismissing the current one cancels the pending
/// expiry; a stale timer that already woke is ignored by its generation check.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    auto_hide: Duration,
}

impl Notifier {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            slot: Arc::default(),
            auto_hide,
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let mut slot = self.lock();
        slot.cancel_timer();
        slot.generation += 1;
        slot.current = Notification {
            open: true,
            message: message.into(),
            severity,
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::debug!("no async runtime, notification stays open until dismissed");
            return;
        };

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let auto_hide = self.auto_hide;
        slot.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(auto_hide).await;

            let mut slot = shared.lock().unwrap_or_else(|e| e.into_inner());
            if slot.generation == generation {
                slot.current.open = false;
                slot.timer = None;
            }
        }));
    }

    /// Closes the notification, keeping its message and severity.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        slot.cancel_timer();
        slot.current.open = false;
    }

    pub fn current(&self) -> Notification {
        self.lock().current.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(AUTO_HIDE)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("current", &self.current())
            .field("auto_hide", &self.auto_hide)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn closes_after_auto_hide() {
        let notifier = Notifier::default();
        notifier.show("Saved", Severity::Success);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(notifier.current().open);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let current = notifier.current();
        assert!(!current.open);
        assert_eq!(current.message, "Saved");
    }

    #[tokio::test(start_paused = true)]
    async fn newer_notification_restarts_the_timer() {
        let notifier = Notifier::default();
        notifier.show("first", Severity::Success);

        tokio::time::sleep(Duration::from_secs(4)).await;
        notifier.show("second", Severity::Error);

        tokio::time::sleep(Duration::from_secs(4)).await;
        let current = notifier.current();
        assert!(current.open);
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!notifier.current().open);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_closes_immediately() {
        let notifier = Notifier::default();
        notifier.show("oops", Severity::Error);
        notifier.dismiss();

        assert!(!notifier.current().open);
        assert_eq!(notifier.current().message, "oops");
    }

    #[test]
    fn without_runtime_stays_open_until_dismissed() {
        let notifier = Notifier::default();
        notifier.show("offline", Severity::Error);
        assert!(notifier.current().open);

        notifier.dismiss();
        assert!(!notifier.current().open);
    }
}

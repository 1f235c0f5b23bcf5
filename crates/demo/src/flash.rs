use dioxus::core::Task;
use dioxus::prelude::*;

/// A transient boolean that turns itself off after a fixed delay.
///
/// Each [`trigger`](Flash::trigger) cancels any pending reset before
/// scheduling its own, so a rapid sequence of triggers keeps the flag
/// on until the last delay elapses instead of racing stale resets.
#[derive(Clone, Copy)]
pub struct Flash {
    active: Signal<bool>,
    pending: Signal<Option<Task>>,
    duration_ms: u32,
}

impl Flash {
    pub fn active(&self) -> bool {
        *self.active.read()
    }

    pub fn trigger(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.active.set(true);

        let mut active = self.active;
        let duration_ms = self.duration_ms;
        let task = spawn(async move {
            delay(duration_ms).await;
            active.set(false);
        });
        self.pending.set(Some(task));
    }
}

/// Hook constructing a [`Flash`] with the given on-duration.
pub fn use_flash(duration_ms: u32) -> Flash {
    Flash {
        active: use_signal(|| false),
        pending: use_signal(|| None),
        duration_ms,
    }
}

#[cfg(target_arch = "wasm32")]
async fn delay(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn delay(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

//! Toast notifications
//!
//! `notify(title, description)` for the whole app. Toasts outlive the page
//! that raised them, so a form can notify and navigate away in one go.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::Notification;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a notification and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Global toast context
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.items().to_vec())
    }

    /// Show a notification; it dismisses itself after the configured duration.
    pub fn notify(&self, notification: Notification) {
        log::debug!("Toast: {}", notification.title);
        let id = self
            .queue
            .try_update(|queue| queue.push(notification))
            .unwrap_or_default();

        let queue = self.queue;
        let duration_ms = core_config().toast_duration_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let _ = queue.try_update(|queue| queue.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|queue| queue.dismiss(id));
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::new("One", "first"));
        let second = queue.push(Notification::new("Two", "second"));

        assert_ne!(first, second);
        let titles: Vec<_> = queue.items().iter().map(|t| t.notification.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::new("One", "first"));
        queue.push(Notification::new("Two", "second"));

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].notification.title, "Two");

        // Dismissing twice is harmless.
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::new("One", "first"));
        queue.dismiss(first);
        let second = queue.push(Notification::new("Two", "second"));
        assert!(second > first);
    }
}

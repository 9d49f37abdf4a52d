// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered collection of live notifications and
//! handles dismissal, both explicit and via the periodic auto-dismiss sweep.

use super::notification::{Notification, NotificationId};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss delays.
    Tick,
}

/// Owns the live notification collection.
///
/// Notifications are kept in insertion order, which is also display order.
/// Dismissing an id that is no longer present is a no-op; this makes a
/// manual dismissal safe against a sweep that fires afterwards.
#[derive(Debug, Default)]
pub struct Manager {
    live: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the live collection.
    pub fn push(&mut self, notification: Notification) {
        self.live.push(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown
    /// ids return `false` without any other effect.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.live.iter().position(|n| n.id() == id) {
            self.live.remove(pos);
            return true;
        }
        false
    }

    /// Processes a tick, dismissing every notification whose delay elapsed.
    ///
    /// Driven by the periodic tick subscription (see `app::subscription`).
    pub fn tick(&mut self) {
        self.live.retain(|n| !n.should_dismiss());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the live notifications in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns whether the live collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns whether any notifications are live.
    ///
    /// Used to gate the periodic tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    /// Clears all live notifications.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Kind;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::success("second"));
        manager.push(Notification::error("third"));

        let titles: Vec<&str> = manager.visible().map(Notification::title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn pushed_notifications_have_unique_ids() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("test-{i}")));
        }

        let mut ids: Vec<_> = manager.visible().map(Notification::id).collect();
        ids.sort_by_key(|id| format!("{id:?}"));
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn dismiss_removes_exactly_that_entry() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        let middle = Notification::info("second");
        let id = middle.id();
        manager.push(middle);
        manager.push(Notification::info("third"));

        assert!(manager.dismiss(id));

        let titles: Vec<&str> = manager.visible().map(Notification::title).collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn dismiss_nonexistent_is_a_noop() {
        let mut manager = Manager::new();
        let unknown = Notification::info("never pushed").id();

        assert!(!manager.dismiss(unknown));
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        manager.push(notification);
        manager.push(Notification::info("other"));

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("expired").dismiss_after(Duration::ZERO));
        manager.push(Notification::info("fresh"));

        manager.tick();

        let titles: Vec<&str> = manager.visible().map(Notification::title).collect();
        assert_eq!(titles, ["fresh"]);
    }

    #[test]
    fn tick_after_manual_dismissal_is_safe() {
        let mut manager = Manager::new();
        let notification = Notification::info("test").dismiss_after(Duration::ZERO);
        let id = notification.id();
        manager.push(notification);

        // Manual dismissal before the sweep fires.
        assert!(manager.dismiss(id));
        manager.tick();

        assert!(manager.is_empty());
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_tick() {
        let mut manager = Manager::new();
        manager.push(Notification::info("expired").dismiss_after(Duration::ZERO));

        manager.handle_message(&Message::Tick);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..4 {
            manager.push(Notification::info(format!("test-{i}")));
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn add_then_dismiss_scenario() {
        // addToast({title: "Welcome"}) -> [{id: X, kind: Info, title: "Welcome"}]
        let mut manager = Manager::new();
        let welcome = Notification::new(Kind::default(), "Welcome");
        let welcome_id = welcome.id();
        manager.push(welcome);

        assert_eq!(manager.len(), 1);
        let first = manager.visible().next().expect("one entry");
        assert_eq!(first.kind(), Kind::Info);
        assert_eq!(first.title(), "Welcome");

        // addToast({type: "error", title: "Failed", description: "bad"})
        manager.push(Notification::error("Failed").with_description("bad"));
        assert_eq!(manager.len(), 2);
        let second = manager.visible().nth(1).expect("two entries");
        assert_eq!(second.kind(), Kind::Error);
        assert_eq!(second.title(), "Failed");
        assert_eq!(second.description(), Some("bad"));

        // removeToast(X) -> only the error entry remains.
        assert!(manager.dismiss(welcome_id));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.visible().next().expect("one entry").title(), "Failed");
    }

    #[test]
    fn dismiss_on_empty_collection_scenario() {
        let mut manager = Manager::new();
        let unknown = Notification::info("x").id();

        assert!(!manager.dismiss(unknown));
        assert!(manager.is_empty());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Time a toast stays on screen before the periodic sweep removes it,
/// unless a per-notification override is set.
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification; controls the accent color of the rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue). Default when no kind is given.
    #[default]
    Info,
    /// Error requiring the user's attention (red).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The title and description are display-ready text; callers localize
/// before constructing the notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier, used as the removal key.
    id: NotificationId,
    /// Kind (determines accent color).
    kind: Kind,
    /// Short headline text.
    title: String,
    /// Optional longer text below the title.
    description: Option<String>,
    /// When this notification was created.
    created_at: Instant,
    /// Delay before the sweep removes this notification.
    dismiss_delay: Duration,
}

impl Notification {
    /// Creates a new notification with the given kind and title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            description: None,
            created_at: Instant::now(),
            dismiss_delay: DEFAULT_DISMISS_DELAY,
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Sets the description text shown below the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the dismiss delay for this notification.
    ///
    /// Useful for messages that need more time to read.
    #[must_use]
    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_delay = delay;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification's dismiss delay has elapsed.
    #[must_use]
    pub fn should_dismiss(&self) -> bool {
        self.age() >= self.dismiss_delay
    }
}

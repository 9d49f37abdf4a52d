// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (sign-in failures, profile updates, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds
//! - [`manager`] - `Manager` for the live collection and lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Profile updated"));
//!
//! // In the view function, render toasts above the active screen
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Every toast auto-dismisses after 3 seconds by default; individual
//!   notifications can override the delay
//! - Dismissal of an already-removed id is a no-op, so a manual dismissal
//!   never races with the auto-dismiss sweep
//! - Position: bottom-right corner, stacked in insertion order

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, DEFAULT_DISMISS_DELAY};
pub use toast::Toast;

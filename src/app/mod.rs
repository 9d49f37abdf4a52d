// SPDX-License-Identifier: MPL-2.0
//! Application state and the Iced run loop.
//!
//! `App` owns everything: the current screen, the per-page form states,
//! the API client, the persisted session, and the notification manager.
//! Startup warnings (unreadable config, corrupted session file) surface
//! as toasts on the first frame instead of aborting the launch.

pub mod paths;
pub mod session;

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::pages::{forgot_password, profile, sign_in, sign_up};
use crate::ui::theming::ThemeMode;
use iced::{window, Subscription, Task, Theme};
use session::Session;
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Application state.
pub struct App {
    i18n: I18n,
    screen: Screen,
    api: ApiClient,
    session: Option<Session>,
    sign_in: sign_in::State,
    sign_up: sign_up::State,
    forgot_password: forgot_password::State,
    profile: profile::State,
    notifications: Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::SignIn,
            api: ApiClient::default(),
            session: None,
            sign_in: sign_in::State::default(),
            sign_up: sign_up::State::default(),
            forgot_password: forgot_password::State::default(),
            profile: profile::State::default(),
            notifications: Manager::new(),
            theme_mode: ThemeMode::Dark,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config, CLI flags, and the
    /// persisted session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let base_url = flags.api_url.unwrap_or_else(|| config.api_base_url());
        let timeout = Duration::from_secs(config.api_timeout_secs());

        let mut notifications = Manager::new();
        let api = match ApiClient::new(&base_url, timeout) {
            Ok(api) => api,
            Err(error) => {
                notifications.push(
                    Notification::error(i18n.tr(error.i18n_key()))
                        .with_description(base_url.clone()),
                );
                ApiClient::default()
            }
        };

        let (session, session_warning) = Session::load();

        for key in [config_warning, session_warning].into_iter().flatten() {
            notifications.push(Notification::info(i18n.tr(&key)));
        }

        let screen = if session.is_some() {
            Screen::Dashboard
        } else {
            Screen::SignIn
        };

        let app = App {
            i18n,
            screen,
            api,
            session,
            notifications,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let heading = match self.screen {
            Screen::SignIn => self.i18n.tr("signin-heading"),
            Screen::SignUp => self.i18n.tr("signup-heading"),
            Screen::ForgotPassword => self.i18n.tr("forgot-heading"),
            Screen::Profile => self.i18n.tr("profile-heading"),
            Screen::Dashboard => return app_name,
        };
        format!("{heading} - {app_name}")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            api: &self.api,
            session: &mut self.session,
            sign_in: &mut self.sign_in,
            sign_up: &mut self.sign_up,
            forgot_password: &mut self.forgot_password,
            profile: &mut self.profile,
            notifications: &mut self.notifications,
        };

        match message {
            Message::SignIn(page_message) => update::handle_sign_in_message(&mut ctx, page_message),
            Message::SignUp(page_message) => update::handle_sign_up_message(&mut ctx, page_message),
            Message::ForgotPassword(page_message) => {
                update::handle_forgot_password_message(&mut ctx, page_message)
            }
            Message::Profile(page_message) => update::handle_profile_message(&mut ctx, page_message),
            Message::Dashboard(page_message) => {
                update::handle_dashboard_message(&mut ctx, page_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::SessionCreated(result) => update::handle_session_created(&mut ctx, result),
            Message::AccountCreated(result) => update::handle_account_created(&mut ctx, result),
            Message::RecoveryRequested(result) => {
                update::handle_recovery_requested(&mut ctx, result)
            }
            Message::ProfileUpdated(result) => update::handle_profile_updated(&mut ctx, result),
            Message::AvatarDialogResult(path) => {
                update::handle_avatar_dialog_result(&mut ctx, path)
            }
            Message::AvatarUpdated(result) => update::handle_avatar_updated(&mut ctx, result),
        }
    }

    fn view(&self) -> iced::Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: self.session.as_ref(),
            sign_in: &self.sign_in,
            sign_up: &self.sign_up,
            forgot_password: &self.forgot_password,
            profile: &self.profile,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;
    use crate::ui::notifications::NotificationMessage;

    fn signed_in_app() -> App {
        App {
            session: Some(Session {
                token: "jwt-token".to_string(),
                user: User {
                    id: "user-1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    avatar_url: None,
                },
            }),
            screen: Screen::Dashboard,
            ..App::default()
        }
    }

    #[test]
    fn title_names_the_current_screen() {
        let app = App::default();
        let title = app.title();
        assert!(title.contains("GoBarber"));
        assert_ne!(title, "GoBarber");

        let dashboard = signed_in_app();
        assert_eq!(dashboard.title(), "GoBarber");
    }

    #[test]
    fn default_app_starts_signed_out() {
        let app = App::default();
        assert_eq!(app.screen, Screen::SignIn);
        assert!(app.session.is_none());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn tick_message_sweeps_notifications() {
        let mut app = App::default();
        app.notifications
            .push(Notification::info("stale").dismiss_after(Duration::ZERO));

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn dismiss_message_removes_one_toast() {
        let mut app = App::default();
        let notification = Notification::info("first");
        let id = notification.id();
        app.notifications.push(notification);
        app.notifications.push(Notification::info("second"));

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = signed_in_app();
        for screen in [
            Screen::SignIn,
            Screen::SignUp,
            Screen::ForgotPassword,
            Screen::Dashboard,
            Screen::Profile,
        ] {
            app.screen = screen;
            let _ = app.view();
        }
    }

    #[test]
    fn theme_follows_theme_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
        app.theme_mode = ThemeMode::System;
        assert_eq!(app.theme(), Theme::Dark);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level screens the application can display.

/// The screen currently shown.
///
/// Unauthenticated users move between `SignIn`, `SignUp`, and
/// `ForgotPassword`; `Dashboard` and `Profile` require a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    Dashboard,
    Profile,
}

impl Screen {
    /// Whether this screen is only reachable with an active session.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard | Self::Profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_sign_in() {
        assert_eq!(Screen::default(), Screen::SignIn);
    }

    #[test]
    fn authenticated_screens_require_session() {
        assert!(Screen::Dashboard.requires_session());
        assert!(Screen::Profile.requires_session());
        assert!(!Screen::SignIn.requires_session());
        assert!(!Screen::SignUp.requires_session());
        assert!(!Screen::ForgotPassword.requires_session());
    }
}

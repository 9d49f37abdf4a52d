// SPDX-License-Identifier: MPL-2.0
//! Persisted authentication session.
//!
//! The bearer token and the signed-in user are stored in CBOR so that the
//! user stays signed in across launches. The session file lives in the app
//! data directory, separate from user-editable TOML preferences.
//!
//! Load and save failures never abort startup; they degrade to the
//! signed-out state and return a message key the caller can surface as a
//! notification.

use super::paths;
use crate::api::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

/// An authenticated session: the API bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Loads the persisted session from the default location.
    ///
    /// Returns `(None, None)` when no session file exists. A file that
    /// cannot be read or parsed yields `None` plus a warning key, and the
    /// broken file is left in place for the next successful sign-in to
    /// overwrite.
    pub fn load() -> (Option<Self>, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the persisted session from a custom base directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Option<Self>, Option<String>) {
        let Some(path) = Self::session_file_path(base_dir) else {
            return (None, None);
        };

        if !path.exists() {
            return (None, None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(session) => (Some(session), None),
                    Err(_) => (None, Some("notification-session-parse-error".to_string())),
                }
            }
            Err(_) => (None, Some("notification-session-read-error".to_string())),
        }
    }

    /// Saves the session to the default location, creating the data
    /// directory if needed. Returns a warning key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the session to a custom base directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::session_file_path(base_dir) else {
            return Some("notification-session-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-session-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-session-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-session-write-error".to_string()),
        }
    }

    /// Deletes the persisted session, if any. Used on sign-out.
    ///
    /// A missing file is not an error; removal failures return a warning key.
    pub fn delete() -> Option<String> {
        Self::delete_from(None)
    }

    /// Deletes the persisted session below a custom base directory.
    pub fn delete_from(base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::session_file_path(base_dir) else {
            return None;
        };

        if !path.exists() {
            return None;
        }

        if fs::remove_file(&path).is_err() {
            return Some("notification-session-delete-error".to_string());
        }
        None
    }

    fn session_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user: User {
                id: "user-1".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let session = sample_session();
        assert!(session.save_to(Some(base_dir.clone())).is_none());

        let (loaded, warning) = Session::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, Some(session));
    }

    #[test]
    fn load_from_empty_directory_is_signed_out_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");

        let (session, warning) = Session::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(session.is_none());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupted_session_file_warns_and_signs_out() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(SESSION_FILE), "not valid cbor").expect("write file");

        let (session, warning) = Session::load_from(Some(base_dir));
        assert!(session.is_none());
        assert_eq!(
            warning.as_deref(),
            Some("notification-session-parse-error")
        );
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        assert!(sample_session().save_to(Some(nested.clone())).is_none());
        assert!(nested.join(SESSION_FILE).exists());
    }

    #[test]
    fn delete_removes_session_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        sample_session().save_to(Some(base_dir.clone()));
        assert!(Session::delete_from(Some(base_dir.clone())).is_none());
        assert!(!base_dir.join(SESSION_FILE).exists());
    }

    #[test]
    fn delete_of_missing_file_is_a_no_op() {
        let temp_dir = tempdir().expect("create temp dir");
        assert!(Session::delete_from(Some(temp_dir.path().to_path_buf())).is_none());
    }
}

//! Session Credential
//!
//! Bearer token lifecycle: stored by a successful login, read into an explicit
//! `Session` value before each authenticated call, cleared on logout and on
//! 401/403 discovery. Backed by `window.localStorage`.

use crate::api::ApiError;

const TOKEN_KEY: &str = "user_token";

/// Bearer credential passed explicitly to every authenticated API call
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Read the stored token, if any
    pub fn load() -> Option<Self> {
        let token = local_storage()?.get_item(TOKEN_KEY).ok()??;
        if token.is_empty() {
            return None;
        }
        Some(Self { token })
    }

    /// Load the stored token or fail the way an expired request would
    pub fn require() -> Result<Self, ApiError> {
        Self::load().ok_or(ApiError::Status {
            status: 401,
            message: "Not logged in".to_string(),
        })
    }

    /// Persist a token returned by login
    pub fn store(token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    /// Forget the stored token
    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_formats_header() {
        let session = Session {
            token: "abc123".to_string(),
        };
        assert_eq!(session.bearer(), "Bearer abc123");
    }
}

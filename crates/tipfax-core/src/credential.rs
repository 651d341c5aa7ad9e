//! Bearer credential used for topic subscription.

use std::fmt;

/// Environment variable the token is read from by default.
pub const DEFAULT_TOKEN_ENV: &str = "SE_JWT_TOKEN";

/// Bearer token (JWT) for the Astro endpoint.
///
/// An empty credential means "not configured". `Debug` never prints the token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    /// Read the token from `var`. Unset, non-unicode, or blank yields an empty credential.
    pub fn from_env(var: &str) -> Self {
        std::env::var(var).map(Self::new).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs: first 10 + `...` + last 10 chars.
    pub fn preview(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 20 {
            return "***".to_string();
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 10..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("len", &self.len())
            .field("preview", &self.preview())
            .finish()
    }
}

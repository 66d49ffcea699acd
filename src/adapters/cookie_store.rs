use crate::domain::model::SessionToken;
use crate::domain::ports::SessionStore;
use crate::utils::error::{FrontError, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

const COOKIE_NAME: &str = "token";
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Persistent session store: one `token=...; Expires=...; Path=/` cookie line in a file.
#[derive(Debug, Clone)]
pub struct CookieFileStore {
    path: PathBuf,
    max_age: Duration,
}

impl CookieFileStore {
    pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            path: path.into(),
            max_age,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_token_with_expiry(&self, token: &SessionToken, expires: DateTime<Utc>) -> Result<()> {
        if token.as_str().contains(';') || token.as_str().contains('\n') {
            return Err(FrontError::ValidationError {
                message: "Token contains characters not allowed in a cookie".to_string(),
            });
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = format!(
            "{}={}; Expires={}; Path=/",
            COOKIE_NAME,
            token.as_str(),
            expires.format(EXPIRES_FORMAT)
        );
        fs::write(&self.path, line)?;
        tracing::debug!("Session cookie written to {}", self.path.display());
        Ok(())
    }

    fn read_cookie(&self) -> Option<(SessionToken, Option<DateTime<Utc>>)> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("⚠️ Cannot read session cookie {}: {}", self.path.display(), e);
                return None;
            }
        };
        parse_cookie(content.trim())
    }
}

/// Parses `token=<value>[; Expires=<date>][; ...]`.
fn parse_cookie(line: &str) -> Option<(SessionToken, Option<DateTime<Utc>>)> {
    let mut parts = line.split(';').map(str::trim);
    let value = parts.next()?.strip_prefix(COOKIE_NAME)?.strip_prefix('=')?;
    if value.is_empty() {
        return None;
    }

    let expires = parts
        .filter_map(|attr| attr.split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("expires"))
        .and_then(|(_, date)| NaiveDateTime::parse_from_str(date, EXPIRES_FORMAT).ok())
        .map(|naive| naive.and_utc());

    Some((SessionToken::new(value), expires))
}

impl SessionStore for CookieFileStore {
    fn get_token(&self) -> Option<SessionToken> {
        let (token, expires) = self.read_cookie()?;
        match expires {
            Some(expires) if expires <= Utc::now() => {
                tracing::debug!("Session cookie expired at {}", expires);
                None
            }
            _ => Some(token),
        }
    }

    fn set_token(&self, token: &SessionToken) -> Result<()> {
        let expires = Utc::now()
            .checked_add_signed(self.max_age)
            .ok_or_else(|| FrontError::ConfigError {
                message: "Cookie max age is out of range".to_string(),
            })?;
        self.set_token_with_expiry(token, expires)
    }

    fn clear_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

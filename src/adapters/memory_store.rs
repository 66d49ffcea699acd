use crate::domain::model::SessionToken;
use crate::domain::ports::SessionStore;
use crate::utils::error::Result;
use std::sync::{Arc, Mutex};

/// Volatile store, lives as long as the process (per-tab storage).
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Arc<Mutex<Option<SessionToken>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<SessionToken> {
        match self.token.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_token(&self, token: &SessionToken) -> Result<()> {
        let mut guard = self.token.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(token.clone());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut guard = self.token.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        Ok(())
    }
}

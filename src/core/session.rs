use crate::domain::model::SessionToken;
use crate::domain::ports::SessionStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// Injected handle to the session store, shared by every flow on a page.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn from_store<S: SessionStore + 'static>(store: S) -> Self {
        Self::new(Arc::new(store))
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.store.get_token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &SessionToken) -> Result<()> {
        self.store.set_token(token)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear_token()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

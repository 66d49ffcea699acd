use crate::domain::model::{Place, ReviewDraft, SessionToken};
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;

/// Where the bearer token lives between page loads.
pub trait SessionStore: Send + Sync {
    /// Never fails: unreadable or expired storage reads as `None`.
    fn get_token(&self) -> Option<SessionToken>;
    fn set_token(&self, token: &SessionToken) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// The backend calls the front end makes.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> std::result::Result<SessionToken, ApiError>;

    async fn fetch_places(
        &self,
        token: Option<&SessionToken>,
    ) -> std::result::Result<Vec<Place>, ApiError>;

    async fn fetch_place(
        &self,
        token: Option<&SessionToken>,
        place_id: &str,
    ) -> std::result::Result<Place, ApiError>;

    async fn submit_review(
        &self,
        token: &SessionToken,
        draft: &ReviewDraft,
    ) -> std::result::Result<serde_json::Value, ApiError>;

    /// Read path: failures collapse into an empty list.
    async fn list_places(&self, token: Option<&SessionToken>) -> Vec<Place> {
        match self.fetch_places(token).await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!("⚠️ Error fetching places: {}", e);
                Vec::new()
            }
        }
    }

    /// Read path: failures collapse into `None`.
    async fn get_place(&self, token: Option<&SessionToken>, place_id: &str) -> Option<Place> {
        match self.fetch_place(token, place_id).await {
            Ok(place) => Some(place),
            Err(e) => {
                tracing::warn!("⚠️ Error fetching place {}: {}", place_id, e);
                None
            }
        }
    }
}

/// Element-id addressed view of the current page (the DOM surface).
pub trait Page: Send {
    fn set_visible(&mut self, id: &str, visible: bool);
    fn set_html(&mut self, id: &str, html: String);
    fn set_text(&mut self, id: &str, text: String);
    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, location: &str);
}

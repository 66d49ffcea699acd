use crate::core::router::LANDING_PAGE;
use crate::core::session::SessionContext;
use crate::domain::ports::{Page, PlacesApi};
use crate::utils::error::{ApiError, FrontError, Result};

pub const ERROR_MESSAGE: &str = "error-message";

/// `submit` on `#login-form`. Write path: every failure reaches the user.
pub async fn submit_login<A: PlacesApi + ?Sized>(
    api: &A,
    session: &SessionContext,
    page: &mut dyn Page,
    email: &str,
    password: &str,
) -> Result<()> {
    match api.login(email, password).await {
        Ok(token) => {
            tracing::info!("✅ Login succeeded for {}", email);
            if let Err(e) = session.store_token(&token) {
                tracing::error!("❌ Could not persist session token: {}", e);
                page.alert(&e.user_friendly_message());
                return Err(e);
            }
            page.navigate(LANDING_PAGE);
            Ok(())
        }
        Err(err) => {
            tracing::warn!("⚠️ Login failed: {}", err);
            match &err {
                ApiError::Network { .. } => page.alert("Network error - please try again"),
                ApiError::InvalidCredentials { .. } => {
                    page.set_text(ERROR_MESSAGE, "Wrong email or password".to_string());
                    page.set_visible(ERROR_MESSAGE, true);
                }
                ApiError::Http { message, .. } => {
                    page.set_text(ERROR_MESSAGE, message.clone());
                    page.set_visible(ERROR_MESSAGE, true);
                }
            }
            Err(FrontError::Api(err))
        }
    }
}

/// `click` on `#logout-link`.
pub fn logout(session: &SessionContext, page: &mut dyn Page) -> Result<()> {
    session.clear()?;
    tracing::info!("👋 Logged out");
    page.alert("Logged out successfully!");
    page.navigate(LANDING_PAGE);
    Ok(())
}

use crate::core::place_list::{parse_threshold, render_places, PlaceList};
use crate::core::session::SessionContext;
use crate::domain::model::SessionToken;
use crate::domain::ports::{Page, PlacesApi};

pub const LOGIN_LINK: &str = "login-link";
pub const LOGOUT_LINK: &str = "logout-link";
pub const PLACES_LIST: &str = "places-list";
pub const PRICE_DISPLAY: &str = "price-display";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    LoggedIn,
}

impl AuthState {
    pub fn from_token(token: Option<&SessionToken>) -> Self {
        match token {
            Some(_) => AuthState::LoggedIn,
            None => AuthState::LoggedOut,
        }
    }
}

/// Visibility of the two nav controls. Exactly one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub login_visible: bool,
    pub logout_visible: bool,
}

impl NavControls {
    pub fn for_state(state: AuthState) -> Self {
        let logged_in = state == AuthState::LoggedIn;
        Self {
            login_visible: !logged_in,
            logout_visible: logged_in,
        }
    }

    pub fn apply(&self, page: &mut dyn Page) {
        page.set_visible(LOGIN_LINK, self.login_visible);
        page.set_visible(LOGOUT_LINK, self.logout_visible);
    }
}

/// Derives page state from the session at load time.
pub struct AuthReconciler<'a, A: PlacesApi + ?Sized> {
    api: &'a A,
    session: &'a SessionContext,
}

impl<'a, A: PlacesApi + ?Sized> AuthReconciler<'a, A> {
    pub fn new(api: &'a A, session: &'a SessionContext) -> Self {
        Self { api, session }
    }

    /// Sets nav visibility on any page. Returns the state it derived.
    pub fn reconcile_controls(&self, page: &mut dyn Page) -> AuthState {
        let state = AuthState::from_token(self.session.token().as_ref());
        tracing::debug!("🔑 Auth state: {:?}", state);
        NavControls::for_state(state).apply(page);
        state
    }

    /// Landing page load: controls, then places when logged in.
    /// Returns `None` when logged out (nothing fetched).
    pub async fn load_landing(&self, page: &mut dyn Page) -> Option<PlaceList> {
        let token = self.session.token();
        let state = AuthState::from_token(token.as_ref());
        NavControls::for_state(state).apply(page);

        if state == AuthState::LoggedOut {
            tracing::info!("❌ Not logged in, places not loaded");
            return None;
        }

        tracing::info!("🔄 Fetching places...");
        let places = self.api.list_places(token.as_ref()).await;
        let list = render_places(&places);
        page.set_html(PLACES_LIST, list.to_html());
        tracing::info!("✅ Rendered {} places", list.cards().len());
        Some(list)
    }
}

/// `input` event of the `max-price` slider.
pub fn on_max_price_input(page: &mut dyn Page, list: &mut PlaceList, raw_value: &str) {
    let Some(threshold) = parse_threshold(raw_value) else {
        tracing::warn!("⚠️ Ignoring non-numeric max price: {:?}", raw_value);
        return;
    };
    page.set_text(PRICE_DISPLAY, format!("€{}", threshold));
    list.apply_max_price(threshold);
    page.set_html(PLACES_LIST, list.to_html());
}

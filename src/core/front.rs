use crate::adapters::{CookieFileStore, Document, HttpApiClient};
use crate::config::toml_config::FrontConfig;
use crate::core::auth_flow::{logout, submit_login};
use crate::core::place_page::load_place_page;
use crate::core::reconciler::{on_max_price_input, AuthReconciler};
use crate::core::review_flow::{ReviewFlow, ReviewForm, DEFAULT_REDIRECT_DELAY};
use crate::core::router::{
    place_detail_location, place_id_from_location, place_location, PageKind, ADD_REVIEW_PAGE,
    LANDING_PAGE, LOGIN_PAGE,
};
use crate::core::session::SessionContext;
use crate::domain::ports::PlacesApi;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Wires the API client and session into page-level flows.
/// Every call loads a fresh `Document`, like a browser page load.
pub struct FrontEngine {
    api: Arc<dyn PlacesApi>,
    session: SessionContext,
    redirect_delay: Duration,
}

impl FrontEngine {
    pub fn new(api: Arc<dyn PlacesApi>, session: SessionContext) -> Self {
        Self {
            api,
            session,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    pub fn from_config(config: &FrontConfig) -> Result<Self> {
        let api = HttpApiClient::new(&config.api.base_url, config.request_timeout())?;
        let store = CookieFileStore::new(&config.session.cookie_path, config.cookie_max_age());
        Ok(Self::new(Arc::new(api), SessionContext::from_store(store))
            .with_redirect_delay(config.redirect_delay()))
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn reconciler(&self) -> AuthReconciler<'_, dyn PlacesApi> {
        AuthReconciler::new(self.api.as_ref(), &self.session)
    }

    /// Loads whatever page `location` points at, as on `DOMContentLoaded`.
    pub async fn open(&self, location: &str) -> Document {
        match PageKind::from_location(location) {
            PageKind::Landing => self.index(None).await,
            PageKind::PlaceDetail => match place_id_from_location(location) {
                Some(place_id) => self.place(&place_id).await,
                None => {
                    let mut page = Document::new(location);
                    self.reconciler().reconcile_controls(&mut page);
                    if let Err(e) =
                        load_place_page(self.api.as_ref(), &self.session, &mut page, location).await
                    {
                        tracing::warn!("⚠️ Place page not loaded: {}", e);
                    }
                    page
                }
            },
            kind => {
                tracing::debug!("Static page {:?}, only nav controls reconciled", kind);
                let mut page = Document::new(location);
                self.reconciler().reconcile_controls(&mut page);
                page
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Document {
        let mut page = Document::new(LOGIN_PAGE);
        self.reconciler().reconcile_controls(&mut page);
        if let Err(e) = submit_login(self.api.as_ref(), &self.session, &mut page, email, password).await {
            tracing::debug!("Login form left intact: {}", e);
        }
        page
    }

    pub fn logout(&self) -> Result<Document> {
        let mut page = Document::new(LANDING_PAGE);
        logout(&self.session, &mut page)?;
        Ok(page)
    }

    pub async fn index(&self, max_price: Option<&str>) -> Document {
        let mut page = Document::new(LANDING_PAGE);
        let list = self.reconciler().load_landing(&mut page).await;

        if let (Some(mut list), Some(raw)) = (list, max_price) {
            on_max_price_input(&mut page, &mut list, raw);
        }
        page
    }

    pub async fn place(&self, place_id: &str) -> Document {
        let location = place_detail_location(place_id);
        let mut page = Document::new(location.clone());
        self.reconciler().reconcile_controls(&mut page);
        if let Err(e) = load_place_page(self.api.as_ref(), &self.session, &mut page, &location).await {
            tracing::warn!("⚠️ Place page not loaded: {}", e);
        }
        page
    }

    pub async fn review(&self, place_id: &str, text: &str, rating: &str) -> (Document, ReviewForm) {
        let location = place_location(ADD_REVIEW_PAGE, place_id);
        let mut page = Document::new(location.clone());
        let mut form = ReviewForm::new(text, rating);
        self.reconciler().reconcile_controls(&mut page);

        let flow = match ReviewFlow::bind(self.api.as_ref(), &self.session, &mut page, &location) {
            Ok(flow) => flow.with_redirect_delay(self.redirect_delay),
            Err(e) => {
                tracing::warn!("⚠️ Review form not bound: {}", e);
                return (page, form);
            }
        };

        if let Err(e) = flow.submit(&mut page, &mut form).await {
            tracing::debug!("Review form left intact: {}", e);
        }
        (page, form)
    }
}

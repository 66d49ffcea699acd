use crate::core::place_detail::{render_place_detail, DetailView};
use crate::core::router::place_id_from_location;
use crate::core::session::SessionContext;
use crate::domain::ports::{Page, PlacesApi};
use crate::utils::error::{FrontError, Result};

pub const PLACE_DETAILS: &str = "place-details";
pub const REVIEWS: &str = "reviews";

/// Resolves the place id of the current location or alerts the user.
pub fn require_place_id(page: &mut dyn Page, location: &str) -> Result<String> {
    match place_id_from_location(location) {
        Some(id) => Ok(id),
        None => {
            tracing::error!("❌ No place_id found in {}", location);
            page.alert("Invalid place information");
            Err(FrontError::NotFoundError {
                message: format!("No place_id in {}", location),
            })
        }
    }
}

/// Place detail page load. A failed fetch degrades to an alert.
pub async fn load_place_page<A: PlacesApi + ?Sized>(
    api: &A,
    session: &SessionContext,
    page: &mut dyn Page,
    location: &str,
) -> Result<Option<DetailView>> {
    let place_id = require_place_id(page, location)?;
    tracing::info!("🔍 Loading place {}", place_id);

    let token = session.token();
    let Some(place) = api.get_place(token.as_ref(), &place_id).await else {
        page.alert("Failed to load place details");
        return Ok(None);
    };

    let view = render_place_detail(&place);
    page.set_html(PLACE_DETAILS, view.details_html.clone());
    page.set_html(REVIEWS, view.reviews_html.clone());
    tracing::info!("✅ Place details loaded: {}", place.id);
    Ok(Some(view))
}

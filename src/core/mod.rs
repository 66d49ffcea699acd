pub mod auth_flow;
pub mod front;
pub mod html;
pub mod place_detail;
pub mod place_list;
pub mod place_page;
pub mod reconciler;
pub mod review_flow;
pub mod router;
pub mod session;

pub use crate::domain::model::{Amenity, Owner, Place, Review, ReviewDraft, SessionToken};
pub use crate::domain::ports::{Page, PlacesApi, SessionStore};
pub use crate::utils::error::Result;

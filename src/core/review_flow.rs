use crate::core::place_page::require_place_id;
use crate::core::router::place_detail_location;
use crate::core::session::SessionContext;
use crate::domain::model::{ReviewDraft, SessionToken};
use crate::domain::ports::{Page, PlacesApi};
use crate::utils::error::{FrontError, Result};
use std::time::Duration;

pub const SUBMIT_LABEL: &str = "Submit Review";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// State of `#review-form` and its submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub text: String,
    /// Raw value of the `#rating` select; empty when nothing was picked.
    pub rating: String,
    pub submit_label: String,
    pub submit_disabled: bool,
}

impl ReviewForm {
    pub fn new(text: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: rating.into(),
            submit_label: SUBMIT_LABEL.to_string(),
            submit_disabled: false,
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.rating.clear();
        self.submit_label = SUBMIT_LABEL.to_string();
        self.submit_disabled = false;
    }
}

/// Builds a draft, checking text before rating.
pub fn validate_review(place_id: &str, form: &ReviewForm) -> Result<ReviewDraft> {
    let text = form.text.trim();
    if text.is_empty() {
        return Err(FrontError::ValidationError {
            message: "Please enter your review text".to_string(),
        });
    }

    let rating = form
        .rating
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| FrontError::ValidationError {
            message: "Please select a rating".to_string(),
        })?;

    Ok(ReviewDraft {
        place_id: place_id.to_string(),
        text: text.to_string(),
        rating,
    })
}

pub struct ReviewFlow<'a, A: PlacesApi + ?Sized> {
    api: &'a A,
    token: SessionToken,
    place_id: String,
    redirect_delay: Duration,
}

impl<'a, A: PlacesApi + ?Sized> ReviewFlow<'a, A> {
    /// Binds the form. Needs a session token and a `place_id` in the location.
    pub fn bind(
        api: &'a A,
        session: &SessionContext,
        page: &mut dyn Page,
        location: &str,
    ) -> Result<Self> {
        let Some(token) = session.token() else {
            page.alert("Please log in to add a review");
            return Err(FrontError::ValidationError {
                message: "Not logged in".to_string(),
            });
        };
        let place_id = require_place_id(page, location)?;

        Ok(Self {
            api,
            token,
            place_id,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        })
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    /// `submit` on `#review-form`: at most one POST per call.
    pub async fn submit(&self, page: &mut dyn Page, form: &mut ReviewForm) -> Result<()> {
        let draft = match validate_review(&self.place_id, form) {
            Ok(draft) => draft,
            Err(e) => {
                page.alert(&e.user_friendly_message());
                return Err(e);
            }
        };

        form.submit_label = SUBMITTING_LABEL.to_string();
        form.submit_disabled = true;

        match self.api.submit_review(&self.token, &draft).await {
            Ok(_) => {
                tracing::info!("✅ Review submitted for place {}", self.place_id);
                page.alert("Review submitted successfully!");
                form.reset();
                tokio::time::sleep(self.redirect_delay).await;
                page.navigate(&place_detail_location(&self.place_id));
                Ok(())
            }
            Err(err) => {
                tracing::warn!("⚠️ Error submitting review: {}", err);
                page.alert(&format!("Error: {}", err.message()));
                form.submit_label = SUBMIT_LABEL.to_string();
                form.submit_disabled = false;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_checked_first() {
        let form = ReviewForm::new("   ", "");
        let err = validate_review("p1", &form).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Please enter your review text");
    }

    #[test]
    fn test_missing_rating() {
        for rating in ["", "0", "6", "abc"] {
            let form = ReviewForm::new("Lovely", rating);
            let err = validate_review("p1", &form).unwrap_err();
            assert_eq!(err.user_friendly_message(), "Please select a rating");
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let form = ReviewForm::new("  Lovely place ", "5");
        let draft = validate_review("p1", &form).unwrap();
        assert_eq!(
            draft,
            ReviewDraft {
                place_id: "p1".to_string(),
                text: "Lovely place".to_string(),
                rating: 5,
            }
        );
    }

    #[test]
    fn test_reset_restores_control() {
        let mut form = ReviewForm::new("x", "3");
        form.submit_disabled = true;
        form.submit_label = SUBMITTING_LABEL.to_string();
        form.reset();
        assert_eq!(form, ReviewForm::new("", ""));
    }
}

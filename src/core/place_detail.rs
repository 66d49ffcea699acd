use crate::core::html::{escape_html, format_location, format_price, text_or};
use crate::domain::model::{Amenity, Owner, Place, Review};

pub const NO_AMENITIES: &str = "No amenities listed";
pub const NO_REVIEWS: &str = "No reviews yet";
const MAX_STARS: u8 = 5;

/// Markup for `#place-details` and `#reviews`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub details_html: String,
    pub reviews_html: String,
}

pub fn render_place_detail(place: &Place) -> DetailView {
    DetailView {
        details_html: render_details(place),
        reviews_html: render_reviews(&place.reviews),
    }
}

/// (filled, empty) star counts; always sums to 5.
pub fn star_counts(rating: Option<i64>) -> (u8, u8) {
    let filled = rating.unwrap_or(0).clamp(0, MAX_STARS as i64) as u8;
    (filled, MAX_STARS - filled)
}

fn host_name(owner: Option<&Owner>) -> String {
    let Some(owner) = owner else {
        return "Unknown".to_string();
    };
    let name = [owner.first_name.as_deref(), owner.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    text_or(Some(name.as_str()), "Unknown")
}

fn render_amenity(amenity: &Amenity) -> String {
    let name = amenity.name.as_deref().unwrap_or_default();
    let icon = if name.trim().is_empty() {
        "default".to_string()
    } else {
        name.trim().to_lowercase()
    };
    format!(
        r#"<span class="amenity"><img src="images/icon_{icon}.png" alt="{name}" class="amenity-icon"> {name}</span>"#,
        icon = escape_html(&icon),
        name = escape_html(name),
    )
}

fn render_details(place: &Place) -> String {
    let amenities = if place.amenities.is_empty() {
        format!("<p>{}</p>", NO_AMENITIES)
    } else {
        place
            .amenities
            .iter()
            .map(render_amenity)
            .collect::<Vec<_>>()
            .join("\n      ")
    };

    format!(
        r#"<div class="place-info">
  <h2>{title}</h2>
  <div class="place-meta">
    <p><strong>Host:</strong> {host}</p>
    <p><strong>Price:</strong> €{price} / night</p>
    <p><strong>Location:</strong> {location}</p>
  </div>
  <div class="place-description">
    <h3>Description</h3>
    <p>{description}</p>
  </div>
  <div class="place-amenities">
    <h3>Amenities</h3>
    <div class="amenities-list">
      {amenities}
    </div>
  </div>
</div>"#,
        title = text_or(place.title.as_deref(), "Unnamed Place"),
        host = host_name(place.owner.as_ref()),
        price = format_price(place.price),
        location = format_location(place.latitude, place.longitude),
        description = text_or(place.description.as_deref(), "No description available"),
        amenities = amenities,
    )
}

fn reviewer(review: &Review) -> String {
    match (review.user_name.as_deref(), review.user_id.as_deref()) {
        (Some(name), _) if !name.trim().is_empty() => escape_html(name.trim()),
        (_, Some(id)) => format!("User {}", escape_html(id)),
        _ => "Anonymous".to_string(),
    }
}

fn render_review(review: &Review) -> String {
    let (filled, empty) = star_counts(review.rating);
    format!(
        r#"<div class="review-card">
  <div class="review-header">
    <strong>{user}</strong>
    <span class="rating">
      <span class="rating-stars">{stars}</span>
      <span class="rating-number">{filled}/5</span>
    </span>
  </div>
  <p class="review-comment">"{text}"</p>
</div>"#,
        user = reviewer(review),
        stars = format!("{}{}", "★".repeat(filled as usize), "☆".repeat(empty as usize)),
        filled = filled,
        text = text_or(review.text.as_deref(), "No comment"),
    )
}

pub fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return format!("<h2>Traveler Reviews</h2>\n<p>{}</p>", NO_REVIEWS);
    }
    let cards = reviews.iter().map(render_review).collect::<Vec<_>>().join("\n");
    format!("<h2>Traveler Reviews</h2>\n{}", cards)
}

use crate::core::html::{escape_html, format_location, format_price, text_or};
use crate::core::router::place_detail_location;
use crate::domain::model::Place;

pub const NO_PLACES_PLACEHOLDER: &str = "<p>No places available</p>";

/// One rendered `.place-card`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCard {
    pub place_id: String,
    /// Text of the card's `.place-price` element, e.g. `€80 / night`.
    pub price_text: String,
    body: String,
    pub visible: bool,
}

impl PlaceCard {
    pub fn from_place(place: &Place) -> Self {
        let price_text = format!("€{} / night", format_price(place.price));
        let body = format!(
            r#"<img src="images/icon_bed.png" alt="Place" class="place-image">
  <div class="place-content">
    <h3 class="place-name">{title}</h3>
    <p class="place-price">{price}</p>
    <p class="place-location">Location: {location}</p>
    <p class="place-description">{description}</p>
    <a class="details-button" href="{href}">View Details</a>
  </div>"#,
            title = text_or(place.title.as_deref(), "Unnamed Place"),
            price = escape_html(&price_text),
            location = format_location(place.latitude, place.longitude),
            description = text_or(place.description.as_deref(), "No description available"),
            href = escape_html(&place_detail_location(&place.id)),
        );

        Self {
            place_id: place.id.clone(),
            price_text,
            body,
            visible: true,
        }
    }

    /// Price as the filter sees it: first run of digits in the price text, else 0.
    pub fn parsed_price(&self) -> u64 {
        parse_price(&self.price_text)
    }

    pub fn to_html(&self) -> String {
        let style = if self.visible { "" } else { r#" style="display: none""# };
        format!(
            "<div class=\"place-card\" data-place-id=\"{}\"{}>\n  {}\n</div>",
            escape_html(&self.place_id),
            style,
            self.body
        )
    }
}

/// Rendered contents of `#places-list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceList {
    cards: Vec<PlaceCard>,
}

impl PlaceList {
    pub fn cards(&self) -> &[PlaceCard] {
        &self.cards
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.place_id.as_str())
            .collect()
    }

    /// Shows a card iff its parsed price <= `max_price`. Never drops cards.
    pub fn apply_max_price(&mut self, max_price: u64) {
        for card in &mut self.cards {
            card.visible = card.parsed_price() <= max_price;
        }
    }

    pub fn to_html(&self) -> String {
        if self.cards.is_empty() {
            return NO_PLACES_PLACEHOLDER.to_string();
        }
        self.cards
            .iter()
            .map(PlaceCard::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn render_places(places: &[Place]) -> PlaceList {
    PlaceList {
        cards: places.iter().map(PlaceCard::from_place).collect(),
    }
}

pub fn parse_price(text: &str) -> u64 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    // 只可能是溢位，視為最高價
    digits.parse().unwrap_or(u64::MAX)
}

/// Slider values arrive as text; anything non-numeric is rejected.
pub fn parse_threshold(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

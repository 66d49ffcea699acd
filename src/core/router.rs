use url::{form_urlencoded, Url};

pub const LANDING_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Landing,
    Login,
    PlaceDetail,
    AddReview,
    Other,
}

impl PageKind {
    /// 依路徑判斷目前頁面
    pub fn from_path(path: &str) -> Self {
        if path.contains(LANDING_PAGE) || path == "/" || path.ends_with('/') {
            PageKind::Landing
        } else if path.contains(LOGIN_PAGE) {
            PageKind::Login
        } else if path.contains(ADD_REVIEW_PAGE) {
            PageKind::AddReview
        } else if path.contains(PLACE_PAGE) {
            PageKind::PlaceDetail
        } else {
            PageKind::Other
        }
    }

    pub fn from_location(location: &str) -> Self {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        Self::from_path(path)
    }
}

pub const PLACE_PAGE: &str = "place.html";
pub const ADD_REVIEW_PAGE: &str = "add_review.html";

/// `page?place_id=...` with the id form-encoded.
pub fn place_location(page: &str, place_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("place_id", place_id)
        .finish();
    format!("{}?{}", page, query)
}

pub fn place_detail_location(place_id: &str) -> String {
    place_location(PLACE_PAGE, place_id)
}

/// Reads `place_id` from a location such as `place.html?place_id=abc`.
pub fn place_id_from_location(location: &str) -> Option<String> {
    // 相對路徑沒辦法直接 parse，先掛一個假的 base
    let base = Url::parse("http://localhost/").ok()?;
    let url = base.join(location).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "place_id")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text for a nullable field, falling back when missing or blank.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => escape_html(fallback),
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 && p.is_finite() => format!("{}", p),
        _ => "N/A".to_string(),
    }
}

pub fn format_location(latitude: Option<f64>, longitude: Option<f64>) -> String {
    let coord = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string());
    format!("{}, {}", coord(latitude), coord(longitude))
}

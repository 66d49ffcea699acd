use crate::domain::ports::Page;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub visible: Option<bool>,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// In-memory page: records every element write, alert and navigation.
#[derive(Debug, Clone, Default)]
pub struct Document {
    location: String,
    elements: BTreeMap<String, Element>,
    alerts: Vec<String>,
    navigations: Vec<String>,
}

impl Document {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// `None` when the element was never shown or hidden.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).and_then(|e| e.visible)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.html.as_deref())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn last_navigation(&self) -> Option<&str> {
        self.navigations.last().map(String::as_str)
    }

    fn entry(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }
}

impl Page for Document {
    fn set_visible(&mut self, id: &str, visible: bool) {
        self.entry(id).visible = Some(visible);
    }

    fn set_html(&mut self, id: &str, html: String) {
        self.entry(id).html = Some(html);
    }

    fn set_text(&mut self, id: &str, text: String) {
        self.entry(id).text = Some(text);
    }

    fn alert(&mut self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, location: &str) {
        tracing::debug!("navigate: {}", location);
        self.navigations.push(location.to_string());
        self.location = location.to_string();
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!-- location: {} -->", self.location)?;
        for (id, element) in &self.elements {
            if element.visible == Some(false) {
                writeln!(f, "<!-- #{} hidden -->", id)?;
                continue;
            }
            if let Some(text) = &element.text {
                writeln!(f, "<!-- #{} -->\n{}", id, text)?;
            }
            if let Some(html) = &element.html {
                writeln!(f, "<!-- #{} -->\n{}", id, html)?;
            }
        }
        for alert in &self.alerts {
            writeln!(f, "<!-- alert: {} -->", alert)?;
        }
        Ok(())
    }
}

mod button;
mod header;

pub use button::{Button, ButtonKind};
pub use header::{Header, HeaderKind};

use serde::{Deserialize, Serialize};

use crate::engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transactional,
    Marketing,
    Utility,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Transactional => write!(f, "transactional"),
            Category::Marketing => write!(f, "marketing"),
            Category::Utility => write!(f, "utility"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transactional" => Ok(Category::Transactional),
            "marketing" => Ok(Category::Marketing),
            "utility" => Ok(Category::Utility),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// A preformatted message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// The message body (may include {{variable}} placeholders)
    pub body_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            body_text: body_text.into(),
            header: None,
            footer: None,
            buttons: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    /// Fields scanned for placeholders: body, header text, then each
    /// button URL. The footer is static.
    pub fn placeholder_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.body_text.as_str())
            .chain(self.header.as_ref().and_then(|h| h.text.as_deref()))
            .chain(self.buttons.iter().filter_map(|b| b.url.as_deref()))
    }

    /// The template's variable set.
    pub fn variables(&self) -> Vec<String> {
        engine::extract_variables(self.placeholder_fields())
    }

    pub fn has_variables(&self) -> bool {
        !self.variables().is_empty()
    }
}

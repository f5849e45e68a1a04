// src/template/button.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Url,
    PhoneNumber,
    QuickReply,
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonKind::Url => write!(f, "url"),
            ButtonKind::PhoneNumber => write!(f, "phone_number"),
            ButtonKind::QuickReply => write!(f, "quick_reply"),
        }
    }
}

impl std::str::FromStr for ButtonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "url" | "link" => Ok(ButtonKind::Url),
            "phone_number" | "phone" => Ok(ButtonKind::PhoneNumber),
            "quick_reply" | "quickreply" => Ok(ButtonKind::QuickReply),
            _ => Err(format!("Invalid button kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub kind: ButtonKind,
    pub text: String,
    /// Target for URL buttons (may include {{variable}} placeholders)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Button {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::Url,
            text: text.into(),
            url: Some(url.into()),
            phone_number: None,
        }
    }

    pub fn phone(text: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::PhoneNumber,
            text: text.into(),
            url: None,
            phone_number: Some(phone_number.into()),
        }
    }

    pub fn quick_reply(text: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::QuickReply,
            text: text.into(),
            url: None,
            phone_number: None,
        }
    }
}

// src/template/header.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    #[default]
    Text,
    Image,
    Video,
    Document,
}

impl HeaderKind {
    pub fn is_media(&self) -> bool {
        !matches!(self, HeaderKind::Text)
    }
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderKind::Text => write!(f, "text"),
            HeaderKind::Image => write!(f, "image"),
            HeaderKind::Video => write!(f, "video"),
            HeaderKind::Document => write!(f, "document"),
        }
    }
}

impl std::str::FromStr for HeaderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(HeaderKind::Text),
            "image" => Ok(HeaderKind::Image),
            "video" => Ok(HeaderKind::Video),
            "document" => Ok(HeaderKind::Document),
            _ => Err(format!("Invalid header kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub kind: HeaderKind,
    /// Header text for text headers (may include {{variable}} placeholders)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Media reference for image/video/document headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl Header {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: HeaderKind::Text,
            text: Some(text.into()),
            media_url: None,
        }
    }

    pub fn media(kind: HeaderKind, media_url: impl Into<String>) -> Self {
        Self {
            kind,
            text: None,
            media_url: Some(media_url.into()),
        }
    }
}

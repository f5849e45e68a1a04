// src/preview.rs
//! Message preview for a whole template: header, body, footer, buttons.

use std::fmt::Write as _;

use serde::Serialize;

use crate::engine::{self, RenderMode, Segment, VariableMapping};
use crate::template::{Button, ButtonKind, Header, HeaderKind, Template};

const HIGHLIGHT: &str = "\x1b[1;36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// How variable segments are set apart in plain-text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStyle {
    Plain,
    Ansi,
}

impl PreviewStyle {
    /// ANSI when stdout is a terminal.
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            PreviewStyle::Ansi
        } else {
            PreviewStyle::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeaderPreview {
    Text { segments: Vec<Segment> },
    Media {
        media: HeaderKind,
        media_url: Option<String>,
        /// Caption text carried next to the media, if any
        #[serde(skip_serializing_if = "Vec::is_empty")]
        segments: Vec<Segment>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonPreview {
    pub kind: ButtonKind,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePreview {
    pub template_id: String,
    pub template_name: String,
    pub mode: RenderMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderPreview>,
    pub body: Vec<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonPreview>,
    /// Variables without a value, in variable-set order.
    pub unconfigured: Vec<String>,
}

impl MessagePreview {
    pub fn build(template: &Template, mapping: &VariableMapping, mode: RenderMode) -> Self {
        let variables = template.variables();

        Self {
            template_id: template.id.clone(),
            template_name: template.name.clone(),
            mode,
            header: template
                .header
                .as_ref()
                .and_then(|h| header_preview(h, mapping, mode)),
            body: engine::render(&template.body_text, mapping, mode),
            footer: template.footer.clone(),
            buttons: template
                .buttons
                .iter()
                .map(|b| button_preview(b, mapping, mode))
                .collect(),
            unconfigured: engine::missing_variables(&variables, mapping),
        }
    }

    pub fn body_text(&self) -> String {
        engine::join_segments(&self.body)
    }

    pub fn to_plain(&self, style: PreviewStyle) -> String {
        let mut out = String::new();

        match &self.header {
            Some(HeaderPreview::Text { segments }) => {
                let _ = writeln!(out, "{}", styled(segments, style));
                out.push('\n');
            }
            Some(HeaderPreview::Media {
                media,
                media_url,
                segments,
            }) => {
                let _ = writeln!(
                    out,
                    "[{}] {}",
                    media,
                    media_url.as_deref().unwrap_or("(no media)")
                );
                if !segments.is_empty() {
                    let _ = writeln!(out, "{}", styled(segments, style));
                }
                out.push('\n');
            }
            None => {}
        }

        let _ = writeln!(out, "{}", styled(&self.body, style));

        if let Some(footer) = &self.footer {
            match style {
                PreviewStyle::Ansi => {
                    let _ = writeln!(out, "\n{}{}{}", DIM, footer, RESET);
                }
                PreviewStyle::Plain => {
                    let _ = writeln!(out, "\n{}", footer);
                }
            }
        }

        if !self.buttons.is_empty() {
            out.push('\n');
            for button in &self.buttons {
                let _ = writeln!(out, "[{}] {}", button.kind, styled(&button.segments, style));
            }
        }

        out
    }
}

fn header_preview(
    header: &Header,
    mapping: &VariableMapping,
    mode: RenderMode,
) -> Option<HeaderPreview> {
    let segments = header
        .text
        .as_ref()
        .map(|text| engine::render(text, mapping, mode));

    if header.kind.is_media() {
        return Some(HeaderPreview::Media {
            media: header.kind,
            media_url: header.media_url.clone(),
            segments: segments.unwrap_or_default(),
        });
    }

    segments.map(|segments| HeaderPreview::Text { segments })
}

fn button_preview(button: &Button, mapping: &VariableMapping, mode: RenderMode) -> ButtonPreview {
    let segments = match (button.kind, &button.url, &button.phone_number) {
        (ButtonKind::Url, Some(url), _) => {
            engine::render(&format!("{} → {}", button.text, url), mapping, mode)
        }
        (ButtonKind::PhoneNumber, _, Some(number)) => {
            vec![Segment::text(format!("{} ({})", button.text, number))]
        }
        _ => vec![Segment::text(button.text.clone())],
    };

    ButtonPreview {
        kind: button.kind,
        segments,
    }
}

fn styled(segments: &[Segment], style: PreviewStyle) -> String {
    match style {
        PreviewStyle::Plain => engine::join_segments(segments),
        PreviewStyle::Ansi => segments
            .iter()
            .map(|segment| {
                if segment.is_variable() {
                    format!("{}{}{}", HIGHLIGHT, segment.display(), RESET)
                } else {
                    segment.display().to_string()
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn delivery_reminder() -> Template {
        Catalog::builtin().find_template("6").unwrap().clone()
    }

    #[test]
    fn test_token_preview_of_full_template() {
        let template = delivery_reminder();
        let mapping = engine::initialize_mapping(&template.variables());
        let preview = MessagePreview::build(&template, &mapping, RenderMode::Token);

        let text = preview.to_plain(PreviewStyle::Plain);

        assert!(text.starts_with("Delivery for order {{order_id}}\n"));
        assert!(text.contains("your package {{tracking_number}} arrives"));
        assert!(text.contains("Reply STOP to unsubscribe"));
        assert!(text.contains("[url] Track package → https://track.example.com/{{tracking_number}}"));
        assert!(text.contains("[phone_number] Call support (+1 555 0100)"));
        assert_eq!(
            preview.unconfigured,
            vec!["customer_name", "tracking_number", "delivery_date", "order_id"]
        );
    }

    #[test]
    fn test_value_preview_substitutes_everywhere() {
        let template = delivery_reminder();
        let mut mapping = engine::initialize_mapping(&template.variables());
        for (name, label) in [
            ("customer_name", "Customer Name"),
            ("tracking_number", "Tracking Number"),
            ("delivery_date", "Delivery Date"),
            ("order_id", "Order ID"),
        ] {
            mapping.set(name, label);
        }

        let preview = MessagePreview::build(&template, &mapping, RenderMode::Value);
        let text = preview.to_plain(PreviewStyle::Plain);

        assert!(!text.contains("{{"));
        assert!(text.contains("Delivery for order <Order ID>"));
        assert!(text.contains("https://track.example.com/<Tracking Number>"));
        assert!(preview.unconfigured.is_empty());
    }

    #[test]
    fn test_media_header() {
        let template = Catalog::builtin().find_template("7").unwrap().clone();
        let preview = MessagePreview::build(&template, &VariableMapping::new(), RenderMode::Token);

        assert_eq!(
            preview.header,
            Some(HeaderPreview::Media {
                media: HeaderKind::Image,
                media_url: Some("https://cdn.example.com/flash-sale.png".to_string()),
                segments: Vec::new(),
            })
        );
        assert!(preview
            .to_plain(PreviewStyle::Plain)
            .starts_with("[image] https://cdn.example.com/flash-sale.png"));
    }

    #[test]
    fn test_media_header_text_is_rendered() {
        let template = Template::new("m", "Media", crate::template::Category::Marketing, "Sale!")
            .with_header(Header {
                kind: HeaderKind::Image,
                text: Some("For {{customer_name}}".to_string()),
                media_url: Some("https://cdn.example.com/sale.png".to_string()),
            });
        let mut mapping = engine::initialize_mapping(&template.variables());

        let token = MessagePreview::build(&template, &mapping, RenderMode::Token);
        assert!(token
            .to_plain(PreviewStyle::Plain)
            .starts_with("[image] https://cdn.example.com/sale.png\nFor {{customer_name}}\n\nSale!"));

        mapping.set("customer_name", "Customer Name");
        let value = MessagePreview::build(&template, &mapping, RenderMode::Value);
        match &value.header {
            Some(HeaderPreview::Media { segments, .. }) => {
                assert_eq!(engine::join_segments(segments), "For <Customer Name>");
            }
            other => panic!("Expected media header, got {:?}", other),
        }
        assert!(value.unconfigured.is_empty());
    }

    #[test]
    fn test_ansi_highlights_variables_only() {
        let template = Template::new("t", "T", crate::template::Category::Utility, "Hi {{a}}");
        let mapping = engine::initialize_mapping(&["a"]);
        let preview = MessagePreview::build(&template, &mapping, RenderMode::Token);

        let text = preview.to_plain(PreviewStyle::Ansi);
        assert_eq!(text, format!("Hi {}{{{{a}}}}{}\n", HIGHLIGHT, RESET));
    }

    #[test]
    fn test_json_shape() {
        let template = Template::new("t", "T", crate::template::Category::Utility, "Hi {{a}}");
        let mapping = engine::initialize_mapping(&["a"]);
        let preview = MessagePreview::build(&template, &mapping, RenderMode::Value);

        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["mode"], "value");
        assert_eq!(json["body"][1]["kind"], "variable");
        assert_eq!(json["unconfigured"][0], "a");
        assert!(json.get("header").is_none());
        assert!(json.get("buttons").is_none());
    }
}

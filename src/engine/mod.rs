// src/engine/mod.rs
//! Placeholder engine.
//!
//! Scans template text for `{{identifier}}` tokens and renders text back
//! with chosen values. Every function here is pure: callers own the
//! [`VariableMapping`] and thread it through.

mod mapping;

pub use mapping::VariableMapping;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `{{name}}` where `name` is one or more ASCII word characters.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// How a configured placeholder is displayed by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Always show the literal `{{name}}` spelling.
    #[default]
    Token,
    /// Show `<value>` when a value is chosen, else `{{name}}`.
    Value,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Token => write!(f, "token"),
            RenderMode::Value => write!(f, "value"),
        }
    }
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token" => Ok(RenderMode::Token),
            "value" => Ok(RenderMode::Value),
            _ => Err(format!("Invalid render mode: {}", s)),
        }
    }
}

/// A piece of rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Variable { name: String, display: String },
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    pub fn variable(name: impl Into<String>, display: impl Into<String>) -> Self {
        Segment::Variable {
            name: name.into(),
            display: display.into(),
        }
    }

    /// The text shown for this segment.
    pub fn display(&self) -> &str {
        match self {
            Segment::Text { text } => text,
            Segment::Variable { display, .. } => display,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable { .. })
    }
}

/// The literal spelling of a placeholder.
pub fn token(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Distinct placeholder names across `fields`, in order of first
/// appearance.
pub fn extract_variables<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut variables = Vec::new();

    for field in fields {
        for caps in PLACEHOLDER_RE.captures_iter(field) {
            let name = &caps[1];
            if seen.insert(name.to_string()) {
                variables.push(name.to_string());
            }
        }
    }

    variables
}

/// Single-field form of [`extract_variables`].
pub fn extract_variables_from(text: &str) -> Vec<String> {
    extract_variables([text])
}

/// A mapping with every variable bound to the empty string.
pub fn initialize_mapping<S: AsRef<str>>(variables: &[S]) -> VariableMapping {
    variables
        .iter()
        .map(|name| (name.as_ref(), ""))
        .collect()
}

/// Split `text` into plain and variable segments.
///
/// Placeholders whose name is not a key of `mapping` stay plain text.
/// Empty text pieces are never emitted.
pub fn render(text: &str, mapping: &VariableMapping, mode: RenderMode) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = &caps[1];

        pending.push_str(&text[last..whole.start()]);
        last = whole.end();

        match mapping.get(name) {
            Some(value) => {
                flush_text(&mut segments, &mut pending);
                segments.push(Segment::variable(name, display_for(name, value, mode)));
            }
            None => pending.push_str(whole.as_str()),
        }
    }

    pending.push_str(&text[last..]);
    flush_text(&mut segments, &mut pending);

    segments
}

fn display_for(name: &str, value: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Value if !value.is_empty() => format!("<{}>", value),
        _ => token(name),
    }
}

fn flush_text(segments: &mut Vec<Segment>, pending: &mut String) {
    if !pending.is_empty() {
        segments.push(Segment::text(std::mem::take(pending)));
    }
}

/// Concatenate the displayed text of `segments`.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(Segment::display).collect()
}

/// True iff every variable has a non-empty value.
pub fn is_complete<S: AsRef<str>>(variables: &[S], mapping: &VariableMapping) -> bool {
    variables
        .iter()
        .all(|name| mapping.is_configured(name.as_ref()))
}

/// Variables still lacking a value, in variable-set order.
pub fn missing_variables<S: AsRef<str>>(variables: &[S], mapping: &VariableMapping) -> Vec<String> {
    variables
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !mapping.is_configured(name))
        .map(str::to_string)
        .collect()
}

/// Form label for a variable: `customer_name` becomes `Customer Name`.
pub fn humanize_variable(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

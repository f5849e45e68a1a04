// src/engine/mapping.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chosen display value per variable. An absent key and an empty value
/// both mean "unconfigured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMapping(BTreeMap<String, String>);

impl VariableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(String::as_str)
    }

    /// The value bound to `variable`, or `""` when it has none.
    pub fn value_of(&self, variable: &str) -> &str {
        self.get(variable).unwrap_or("")
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.0.contains_key(variable)
    }

    pub fn is_configured(&self, variable: &str) -> bool {
        !self.value_of(variable).is_empty()
    }

    pub fn set(&mut self, variable: impl Into<String>, value: impl Into<String>) {
        self.0.insert(variable.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_unconfigured() {
        let mapping: VariableMapping = [("name", "")].into_iter().collect();

        assert!(!mapping.is_configured("name"));
        assert!(!mapping.is_configured("missing"));
        assert_eq!(mapping.value_of("missing"), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut mapping = VariableMapping::new();
        mapping.set("name", "Customer Name");
        mapping.set("name", "Order ID");

        assert_eq!(mapping.get("name"), Some("Order ID"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mapping: VariableMapping = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&mapping).unwrap();

        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}

// src/config.rs
//! Catalog file loading and logging setup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::error::{Result, StencilError};

/// Environment variable naming a catalog file to load instead of the
/// built-in one.
pub const CATALOG_ENV: &str = "STENCIL_CATALOG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "STENCIL_LOG";

/// Load the catalog at `path`, or the built-in catalog when `None`.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(Catalog::builtin()),
    }
}

/// Load a YAML (`.yaml`/`.yml`) or JSON (`.json`) catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;

    let catalog: Catalog = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => {
            return Err(StencilError::Config(format!(
                "Unsupported catalog format: {} (expected .yaml, .yml or .json)",
                path.display()
            )))
        }
    };

    validate_catalog(&catalog)?;

    debug!(
        path = %path.display(),
        templates = catalog.templates.len(),
        items = catalog.items.len(),
        "Loaded catalog file"
    );

    Ok(catalog)
}

/// Reject empty or duplicate template ids and duplicate item keys.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut ids = HashSet::new();
    for template in &catalog.templates {
        if template.id.trim().is_empty() {
            return Err(StencilError::Config(format!(
                "Template '{}' has an empty id",
                template.name
            )));
        }
        if !ids.insert(template.id.as_str()) {
            return Err(StencilError::Config(format!(
                "Duplicate template id: {}",
                template.id
            )));
        }
    }

    let mut keys = HashSet::new();
    for item in &catalog.items {
        if !keys.insert(item.key.as_str()) {
            return Err(StencilError::Config(format!(
                "Duplicate item key: {}",
                item.key
            )));
        }
    }

    Ok(())
}

/// Logging setup for the CLI. Logs always go to stderr so stdout stays
/// clean for previews and `--json` output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: atty::is(atty::Stream::Stderr),
        }
    }
}

impl LogConfig {
    pub fn verbose(verbose: bool) -> Self {
        let mut config = Self::default();
        if verbose {
            config.level = "debug".to_string();
        }
        config
    }

    /// Filter from `STENCIL_LOG`, then `RUST_LOG`, then `level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    pub fn init(&self) {
        // A subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(self.ansi)
            .with_target(false)
            .try_init();

        debug!("Logging initialized with level: {}", self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConfigurableItem;
    use crate::template::{Category, Template};
    use tempfile::TempDir;

    const YAML_CATALOG: &str = r#"
templates:
  - id: promo
    name: Promo
    category: marketing
    body_text: "Hey {{customer_name}}, use {{discount_code}}"
    footer: "T&C apply"
    buttons:
      - kind: url
        text: Shop
        url: "https://shop.example.com/{{discount_code}}"
items:
  - key: customer_name
    label: Customer Name
  - key: discount_code
    label: Discount Code
"#;

    #[test]
    fn test_resolve_builtin() {
        let catalog = resolve_catalog(None).unwrap();
        assert!(!catalog.templates.is_empty());
        assert!(!catalog.items.is_empty());
    }

    #[test]
    fn test_load_yaml_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.yaml");
        std::fs::write(&path, YAML_CATALOG).unwrap();

        let catalog = load_catalog(&path).unwrap();
        let promo = catalog.find_template("promo").unwrap();

        assert_eq!(promo.category, Category::Marketing);
        assert_eq!(promo.buttons.len(), 1);
        assert_eq!(promo.variables(), vec!["customer_name", "discount_code"]);
        assert_eq!(catalog.items.len(), 2);
    }

    #[test]
    fn test_load_json_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        let catalog = Catalog::builtin();
        std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.templates, catalog.templates);
        assert_eq!(loaded.items, catalog.items);
    }

    #[test]
    fn test_unsupported_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(load_catalog(&path), Err(StencilError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.yaml");

        assert!(matches!(load_catalog(&path), Err(StencilError::Io(_))));
    }

    #[test]
    fn test_duplicate_template_ids_rejected() {
        let catalog = Catalog::new(
            vec![
                Template::new("1", "A", Category::Utility, "a"),
                Template::new("1", "B", Category::Utility, "b"),
            ],
            Vec::new(),
        );

        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("Duplicate template id"));
    }

    #[test]
    fn test_empty_template_id_rejected() {
        let catalog = Catalog::new(
            vec![Template::new(" ", "Blank", Category::Utility, "a")],
            Vec::new(),
        );

        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_duplicate_item_keys_rejected() {
        let catalog = Catalog::new(
            Vec::new(),
            vec![
                ConfigurableItem::new("k", "One"),
                ConfigurableItem::new("k", "Two"),
            ],
        );

        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("Duplicate item key"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_ok());
    }

    #[test]
    fn test_verbose_log_level() {
        assert_eq!(LogConfig::verbose(true).level, "debug");
        assert_eq!(LogConfig::verbose(false).level, "warn");
    }
}

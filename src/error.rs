use thiserror::Error;

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Invalid value for '{variable}': {reason}")]
    InvalidValue { variable: String, reason: String },

    #[error("Invalid assignment '{0}'. Expected format: variable=value")]
    InvalidAssignment(String),

    #[error("Unknown configurable item: {0}")]
    UnknownItem(String),

    #[error("No template selected")]
    NoTemplateSelected,

    #[error(
        "Incomplete configuration: please configure all variables before saving (missing: {})",
        .missing.join(", ")
    )]
    IncompleteConfiguration { missing: Vec<String> },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StencilError>;

// src/session.rs
//! Configuration session: the state a host threads between interactions.
//!
//! The engine stays stateless; a `ConfigSession` owns the active
//! template, its variable set and the mapping being edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{self, RenderMode, VariableMapping};
use crate::error::{Result, StencilError};
use crate::preview::MessagePreview;
use crate::template::Template;

/// Character sequences a chosen value may not contain.
const RESERVED_SEQUENCES: [&str; 4] = ["{{", "}}", "<", ">"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Uninitialized,
    AllEmpty,
    PartiallyFilled,
    Complete,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Uninitialized => write!(f, "uninitialized"),
            SessionStatus::AllEmpty => write!(f, "all_empty"),
            SessionStatus::PartiallyFilled => write!(f, "partially_filled"),
            SessionStatus::Complete => write!(f, "complete"),
        }
    }
}

/// A configuration accepted by [`ConfigSession::save`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub id: Uuid,
    pub template_id: String,
    pub template_name: String,
    pub mapping: VariableMapping,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct ActiveTemplate {
    template: Template,
    variables: Vec<String>,
    mapping: VariableMapping,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigSession {
    active: Option<ActiveTemplate>,
}

impl ConfigSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `template` active with a freshly initialized mapping. Values
    /// chosen for a previous template are dropped.
    pub fn select(&mut self, template: Template) {
        let variables = template.variables();
        let mapping = engine::initialize_mapping(&variables);

        debug!(
            template_id = %template.id,
            variable_count = variables.len(),
            "Selected template"
        );

        self.active = Some(ActiveTemplate {
            template,
            variables,
            mapping,
        });
    }

    /// Back to no selection. Nothing is kept.
    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn template(&self) -> Option<&Template> {
        self.active.as_ref().map(|a| &a.template)
    }

    pub fn variables(&self) -> &[String] {
        self.active.as_ref().map(|a| a.variables.as_slice()).unwrap_or(&[])
    }

    pub fn mapping(&self) -> Option<&VariableMapping> {
        self.active.as_ref().map(|a| &a.mapping)
    }

    pub fn assign(&mut self, variable: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let active = self.active_mut()?;

        if !active.mapping.contains(variable) {
            return Err(StencilError::UnknownVariable(variable.to_string()));
        }
        if let Some(seq) = RESERVED_SEQUENCES.iter().find(|seq| value.contains(**seq)) {
            return Err(StencilError::InvalidValue {
                variable: variable.to_string(),
                reason: format!("value may not contain '{}'", seq),
            });
        }

        debug!(variable, value = %value, "Assigned variable");
        active.mapping.set(variable, value);
        Ok(())
    }

    pub fn clear_value(&mut self, variable: &str) -> Result<()> {
        let active = self.active_mut()?;

        if !active.mapping.contains(variable) {
            return Err(StencilError::UnknownVariable(variable.to_string()));
        }

        active.mapping.set(variable, "");
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        match &self.active {
            Some(active) => engine::is_complete(&active.variables, &active.mapping),
            None => false,
        }
    }

    pub fn missing_variables(&self) -> Vec<String> {
        match &self.active {
            Some(active) => engine::missing_variables(&active.variables, &active.mapping),
            None => Vec::new(),
        }
    }

    /// `(configured, total)` variable counts for the active template.
    pub fn progress(&self) -> (usize, usize) {
        let Some(active) = &self.active else {
            return (0, 0);
        };

        let configured = active
            .variables
            .iter()
            .filter(|v| active.mapping.is_configured(v))
            .count();

        (configured, active.mapping.len())
    }

    pub fn status(&self) -> SessionStatus {
        if self.active.is_none() {
            return SessionStatus::Uninitialized;
        }

        match self.progress() {
            (configured, total) if configured == total => SessionStatus::Complete,
            (0, _) => SessionStatus::AllEmpty,
            _ => SessionStatus::PartiallyFilled,
        }
    }

    pub fn preview(&self, mode: RenderMode) -> Result<MessagePreview> {
        let active = self.active.as_ref().ok_or(StencilError::NoTemplateSelected)?;
        Ok(MessagePreview::build(&active.template, &active.mapping, mode))
    }

    /// Accept the configuration when every variable has a value. The
    /// session is discarded on success; on failure it is left untouched.
    pub fn save(&mut self) -> Result<SavedConfiguration> {
        let active = self.active.as_ref().ok_or(StencilError::NoTemplateSelected)?;

        let missing = engine::missing_variables(&active.variables, &active.mapping);
        if !missing.is_empty() {
            warn!(
                template_id = %active.template.id,
                missing = ?missing,
                "Rejected incomplete configuration"
            );
            return Err(StencilError::IncompleteConfiguration { missing });
        }

        let saved = SavedConfiguration {
            id: Uuid::new_v4(),
            template_id: active.template.id.clone(),
            template_name: active.template.name.clone(),
            mapping: active.mapping.clone(),
            saved_at: Utc::now(),
        };

        info!(
            configuration_id = %saved.id,
            template_id = %saved.template_id,
            mapping = ?saved.mapping,
            "Saved configuration"
        );

        self.reset();
        Ok(saved)
    }

    fn active_mut(&mut self) -> Result<&mut ActiveTemplate> {
        self.active.as_mut().ok_or(StencilError::NoTemplateSelected)
    }
}

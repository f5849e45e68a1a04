use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::{humanize_variable, RenderMode};
use crate::error::{Result, StencilError};
use crate::preview::{MessagePreview, PreviewStyle};
use crate::session::{ConfigSession, SessionStatus};
use crate::template::{Category, Template};

#[derive(Serialize)]
struct TemplateSummary<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    variables: Vec<String>,
}

#[derive(Serialize)]
struct PreviewReport {
    #[serde(flatten)]
    preview: MessagePreview,
    configured: usize,
    total: usize,
    status: SessionStatus,
}

#[derive(Serialize)]
struct VariableInfo {
    name: String,
    label: String,
}

#[derive(Serialize)]
struct TemplateDetail<'a> {
    template: &'a Template,
    variables: Vec<VariableInfo>,
    preview: MessagePreview,
}

/// Parse a "variable=item" assignment
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    let (variable, item) = s
        .split_once('=')
        .ok_or_else(|| StencilError::InvalidAssignment(s.to_string()))?;

    let variable = variable.trim();
    let item = item.trim();
    if variable.is_empty() || item.is_empty() {
        return Err(StencilError::InvalidAssignment(s.to_string()));
    }

    Ok((variable.to_string(), item.to_string()))
}

/// Select `id` and apply every assignment, resolving items to their labels.
fn configure(catalog: &Catalog, id: &str, assignments: &[String]) -> Result<ConfigSession> {
    let template = catalog.find_template(id)?;
    let mut session = ConfigSession::new();
    session.select(template.clone());

    for assignment in assignments {
        let (variable, item) = parse_assignment(assignment)?;
        let item = catalog.resolve_item(&item)?;
        debug!(variable = %variable, item = %item.key, "Resolved assignment");
        session.assign(&variable, item.label.clone())?;
    }

    Ok(session)
}

pub fn handle_list(catalog: &Catalog, category: Option<String>, json: bool) -> Result<()> {
    let category: Option<Category> = category
        .map(|c| c.parse::<Category>().map_err(|_| StencilError::InvalidCategory(c)))
        .transpose()?;

    let templates: Vec<&Template> = match category {
        Some(category) => catalog.templates_in(category).collect(),
        None => catalog.templates.iter().collect(),
    };

    if json {
        let summaries: Vec<TemplateSummary> = templates
            .iter()
            .map(|t| TemplateSummary {
                id: &t.id,
                name: &t.name,
                category: t.category,
                variables: t.variables(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    println!("{:<6} {:<15} {:<5} NAME", "ID", "CATEGORY", "VARS");
    for template in templates {
        println!(
            "{:<6} {:<15} {:<5} {}",
            template.id,
            template.category,
            template.variables().len(),
            template.name
        );
    }

    Ok(())
}

pub fn handle_items(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.items)?);
        return Ok(());
    }

    if catalog.items.is_empty() {
        println!("No configurable items.");
        return Ok(());
    }

    for item in &catalog.items {
        println!("{:<20} {}", item.key, item.label);
    }

    Ok(())
}

pub fn handle_show(catalog: &Catalog, id: String, json: bool) -> Result<()> {
    let session = configure(catalog, &id, &[])?;
    let template = catalog.find_template(&id)?;
    let preview = session.preview(RenderMode::Token)?;

    let variables: Vec<VariableInfo> = session
        .variables()
        .iter()
        .map(|name| VariableInfo {
            name: name.clone(),
            label: humanize_variable(name),
        })
        .collect();

    if json {
        let detail = TemplateDetail {
            template,
            variables,
            preview,
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{} ({}) [{}]", template.name, template.id, template.category);
    println!();
    print!("{}", preview.to_plain(PreviewStyle::detect()));
    println!();

    if variables.is_empty() {
        println!("No variables to configure.");
    } else {
        println!("Variables ({}):", variables.len());
        for variable in &variables {
            println!("  {:<20} {}", variable.name, variable.label);
        }
    }

    Ok(())
}

pub fn handle_preview(
    catalog: &Catalog,
    id: String,
    assignments: Vec<String>,
    json: bool,
) -> Result<()> {
    let session = configure(catalog, &id, &assignments)?;
    let preview = session.preview(RenderMode::Value)?;
    let (configured, total) = session.progress();
    let status = session.status();

    if json {
        let report = PreviewReport {
            preview,
            configured,
            total,
            status,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", preview.to_plain(PreviewStyle::detect()));
    println!();
    println!("Configured: {}/{} ({})", configured, total, status);

    if !preview.unconfigured.is_empty() {
        println!("Unconfigured: {}", preview.unconfigured.join(", "));
    }

    Ok(())
}

pub fn handle_save(
    catalog: &Catalog,
    id: String,
    assignments: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut session = configure(catalog, &id, &assignments)?;
    let variables = session.variables().to_vec();
    let saved = session.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    println!("Template configured: {} is ready to use.", saved.template_name);
    if saved.mapping.is_empty() {
        println!("  (no variables)");
    }
    for variable in &variables {
        println!("  {} -> {}", variable, saved.mapping.value_of(variable));
    }

    Ok(())
}

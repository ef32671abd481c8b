//! Metadata extraction from workflow definition files.

use crate::error::WorkflowParseError;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_WORKFLOW_NAME: &str = "Unnamed Workflow";

/// Descriptive metadata for one workflow file, rebuilt on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowInfo {
    pub filename: String,
    pub name: String,
    pub description: Option<String>,
    /// Distinct node types, sorted.
    pub node_types: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
}

impl WorkflowInfo {
    /// Build the record from raw JSON text. `filename` is kept as provenance.
    ///
    /// Exported workflows are loosely typed, so a field with an unexpected
    /// type falls back to its default instead of rejecting the file. Only
    /// unparseable JSON or a non-object document is an error.
    pub fn from_json(filename: &str, json: &str) -> Result<Self, WorkflowParseError> {
        let document: Value = serde_json::from_str(json)?;
        let document = document.as_object().ok_or(WorkflowParseError::NotAnObject)?;

        // settings.description wins over meta.description
        let description = section_description(document, "settings")
            .or_else(|| section_description(document, "meta"))
            .filter(|d| is_truthy(d))
            .map(text_of);

        let node_types: BTreeSet<String> = document
            .get("nodes")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|node| node.as_object()?.get("type"))
            .filter(|node_type| !node_type.is_null())
            .map(text_of)
            .collect();

        Ok(Self {
            filename: filename.to_string(),
            name: document
                .get("name")
                .filter(|name| !name.is_null())
                .map(text_of)
                .unwrap_or_else(|| DEFAULT_WORKFLOW_NAME.to_string()),
            description,
            node_types: node_types.into_iter().collect(),
            created_at: optional_text(document, "createdAt"),
            updated_at: optional_text(document, "updatedAt"),
            active: document.get("active").is_some_and(is_truthy),
        })
    }
}

/// `description` of a nested object section, ignoring null values and
/// sections that are not objects.
fn section_description<'a>(document: &'a Map<String, Value>, section: &str) -> Option<&'a Value> {
    document
        .get(section)?
        .as_object()?
        .get("description")
        .filter(|d| !d.is_null())
}

fn optional_text(document: &Map<String, Value>, key: &str) -> String {
    document
        .get(key)
        .filter(|value| !value.is_null())
        .map(text_of)
        .unwrap_or_default()
}

/// Strings verbatim, anything else as its JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Empty strings, zero, `false`, `null` and empty containers count as unset.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Read and parse a workflow definition from disk.
pub fn extract_workflow_info(path: &Path) -> Result<WorkflowInfo, WorkflowParseError> {
    let json = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    WorkflowInfo::from_json(&filename, &json)
}

//! Admin schema for the content editor.
//!
//! Declares the document types (`page`, `service`, `siteSettings`,
//! `navigation`), validates documents against them, and exports them as JSON.

pub mod field;
pub mod types;
pub mod validate;

use std::sync::LazyLock;

use serde_json::Value;
use tracing::debug;

use aderyn_shared::{AderynError, Result};

pub use field::{DocumentType, Field, FieldKind, Rule};
pub use validate::{Violation, ViolationKind, validate};

static DOCUMENT_TYPES: LazyLock<Vec<DocumentType>> = LazyLock::new(|| {
    vec![
        types::page(),
        types::service(),
        types::site_settings(),
        types::navigation(),
    ]
});

/// Every document type, in editor menu order.
pub fn document_types() -> &'static [DocumentType] {
    &DOCUMENT_TYPES
}

/// Look up a document type by name.
pub fn find(name: &str) -> Option<&'static DocumentType> {
    DOCUMENT_TYPES.iter().find(|t| t.name == name)
}

/// Validate and fail with every violation listed in the message.
pub fn ensure_valid(document: &Value) -> Result<()> {
    let violations = validate(document);
    if violations.is_empty() {
        return Ok(());
    }

    let label = document
        .get("_id")
        .or_else(|| document.get("slug").and_then(|s| s.get("current")))
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>");
    let type_name = document.get("_type").and_then(Value::as_str).unwrap_or("document");
    debug!(type_name, label, count = violations.len(), "document failed validation");

    let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
    Err(AderynError::validation(format!(
        "{type_name} '{label}': {}",
        details.join("; ")
    )))
}

/// JSON rendering of the schema. With `only`, just that type.
pub fn export(only: Option<&str>) -> Result<Value> {
    let to_value = |t: &DocumentType| {
        serde_json::to_value(t)
            .map_err(|e| AderynError::parse(format!("failed to serialize schema type {}: {e}", t.name)))
    };

    match only {
        Some(name) => {
            let doc_type = find(name).ok_or_else(|| {
                let known: Vec<_> = DOCUMENT_TYPES.iter().map(|t| t.name).collect();
                AderynError::config(format!(
                    "unknown document type '{name}' (expected one of: {})",
                    known.join(", ")
                ))
            })?;
            to_value(doc_type)
        }
        None => Ok(Value::Array(
            DOCUMENT_TYPES.iter().map(to_value).collect::<Result<Vec<_>>>()?,
        )),
    }
}

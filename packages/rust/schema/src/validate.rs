//! Document validation against the declared types.
//!
//! Mirrors the checks the editor runs before publishing, so documents written
//! through the API (the seed migration) meet the same rules.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

use crate::field::{Field, FieldKind};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// A single rule a document breaks, located by a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    NotAnObject,
    MissingType,
    UnknownType(String),
    Required,
    MissingKey,
    WrongKind { expected: &'static str },
    NotInList { value: String },
    TooLong { max: usize },
    InvalidUrl,
    InvalidEmail,
    /// Value present in a field its visibility condition hides.
    HiddenFieldPopulated,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "<document>" } else { &self.path };
        match &self.kind {
            ViolationKind::NotAnObject => write!(f, "{path}: document must be a JSON object"),
            ViolationKind::MissingType => write!(f, "{path}: missing _type"),
            ViolationKind::UnknownType(t) => write!(f, "{path}: unknown document type '{t}'"),
            ViolationKind::Required => write!(f, "{path}: required"),
            ViolationKind::MissingKey => write!(f, "{path}: array item has no _key"),
            ViolationKind::WrongKind { expected } => write!(f, "{path}: expected {expected}"),
            ViolationKind::NotInList { value } => write!(f, "{path}: '{value}' is not an allowed value"),
            ViolationKind::TooLong { max } => write!(f, "{path}: longer than {max} characters"),
            ViolationKind::InvalidUrl => write!(f, "{path}: not a valid http(s) URL"),
            ViolationKind::InvalidEmail => write!(f, "{path}: not a valid email address"),
            ViolationKind::HiddenFieldPopulated => {
                write!(f, "{path}: set while hidden by the selected type")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Validate a whole document. An empty result means it is valid.
pub fn validate(document: &Value) -> Vec<Violation> {
    let mut checker = Checker::default();

    let Some(object) = document.as_object() else {
        checker.push("", ViolationKind::NotAnObject);
        return checker.violations;
    };
    let Some(type_name) = object.get("_type").and_then(Value::as_str) else {
        checker.push("_type", ViolationKind::MissingType);
        return checker.violations;
    };
    let Some(doc_type) = crate::find(type_name) else {
        checker.push("_type", ViolationKind::UnknownType(type_name.to_string()));
        return checker.violations;
    };

    checker.fields(&doc_type.fields, object, "");
    checker.violations
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn push(&mut self, path: &str, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.to_string(),
            kind,
        });
    }

    fn fields(&mut self, fields: &[Field], parent: &Map<String, Value>, prefix: &str) {
        for field in fields {
            let path = join(prefix, field.name);
            let value = parent.get(field.name).filter(|v| !v.is_null());

            if field.visible_when.as_ref().is_some_and(|c| c.hides(parent)) {
                if value.is_some() {
                    self.push(&path, ViolationKind::HiddenFieldPopulated);
                }
                continue;
            }

            match value {
                None => {
                    if field.is_required() {
                        self.push(&path, ViolationKind::Required);
                    }
                }
                Some(value) => self.field(field, value, &path),
            }
        }
    }

    fn field(&mut self, field: &Field, value: &Value, path: &str) {
        if field.is_required() && is_blank(value) {
            self.push(path, ViolationKind::Required);
            return;
        }
        if let (Some(max), Some(s)) = (field.max_length(), value.as_str()) {
            if s.chars().count() > max {
                self.push(path, ViolationKind::TooLong { max });
            }
        }
        self.kind(&field.kind, value, path);
    }

    fn kind(&mut self, kind: &FieldKind, value: &Value, path: &str) {
        match kind {
            FieldKind::String { list } => {
                let Some(s) = self.expect_str(value, path) else { return };
                if !list.is_empty() && !list.iter().any(|c| c.value == s) {
                    self.push(path, ViolationKind::NotInList { value: s.to_string() });
                }
            }
            FieldKind::Text { .. } => {
                self.expect_str(value, path);
            }
            FieldKind::Slug { .. } => {
                match value.get("current").and_then(Value::as_str) {
                    Some(current) if !current.trim().is_empty() => {}
                    Some(_) | None if value.is_object() => {
                        self.push(&join(path, "current"), ViolationKind::Required)
                    }
                    _ => self.push(path, ViolationKind::WrongKind { expected: "a slug object" }),
                }
            }
            FieldKind::Number => {
                if !value.is_number() {
                    self.push(path, ViolationKind::WrongKind { expected: "a number" });
                }
            }
            FieldKind::Boolean => {
                if !value.is_boolean() {
                    self.push(path, ViolationKind::WrongKind { expected: "a boolean" });
                }
            }
            FieldKind::Url => {
                let Some(s) = self.expect_str(value, path) else { return };
                let ok = Url::parse(s).is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
                if !ok {
                    self.push(path, ViolationKind::InvalidUrl);
                }
            }
            FieldKind::Email => {
                let Some(s) = self.expect_str(value, path) else { return };
                if !EMAIL.is_match(s) {
                    self.push(path, ViolationKind::InvalidEmail);
                }
            }
            FieldKind::Reference { .. } => {
                if value.get("_ref").and_then(Value::as_str).is_none_or(str::is_empty) {
                    self.push(path, ViolationKind::WrongKind { expected: "a reference" });
                }
            }
            FieldKind::Image { fields, .. } => {
                let Some(object) = self.expect_object(value, path) else { return };
                self.fields(fields, object, path);
            }
            FieldKind::Object { fields, .. } => {
                let Some(object) = self.expect_object(value, path) else { return };
                self.fields(fields, object, path);
            }
            FieldKind::Array { of } => {
                let Some(items) = value.as_array() else {
                    self.push(path, ViolationKind::WrongKind { expected: "an array" });
                    return;
                };
                for (i, item) in items.iter().enumerate() {
                    self.array_item(of, item, &format!("{path}[{i}]"));
                }
            }
            FieldKind::Block => {
                let Some(object) = self.expect_object(value, path) else { return };
                if !object.get("children").is_some_and(Value::is_array) {
                    self.push(&join(path, "children"), ViolationKind::WrongKind { expected: "an array" });
                }
            }
        }
    }

    fn array_item(&mut self, members: &[FieldKind], item: &Value, path: &str) {
        let Some(object) = item.as_object() else {
            self.push(path, ViolationKind::WrongKind { expected: "an object" });
            return;
        };
        if object.get("_key").and_then(Value::as_str).is_none_or(str::is_empty) {
            self.push(path, ViolationKind::MissingKey);
        }

        // Untyped items belong to the single object member, if there is one.
        let member = match object.get("_type").and_then(Value::as_str) {
            Some(t) => members.iter().find(|m| m.type_name() == t),
            None => match members {
                [only @ FieldKind::Object { .. }] => Some(only),
                _ => None,
            },
        };
        match member {
            Some(kind) => self.kind(kind, item, path),
            None => {
                let found = object.get("_type").and_then(Value::as_str).unwrap_or("<none>");
                self.push(path, ViolationKind::UnknownType(found.to_string()));
            }
        }
    }

    fn expect_str<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v str> {
        let s = value.as_str();
        if s.is_none() {
            self.push(path, ViolationKind::WrongKind { expected: "a string" });
        }
        s
    }

    fn expect_object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        let object = value.as_object();
        if object.is_none() {
            self.push(path, ViolationKind::WrongKind { expected: "an object" });
        }
        object
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

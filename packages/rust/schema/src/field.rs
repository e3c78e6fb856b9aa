//! Field definitions and their builders.
//!
//! Serialized with the editor's key names so `aderyn schema` output can be
//! compared against the studio configuration by eye.

use serde::Serialize;
use serde_json::Value;

/// A document type accepted by the editor.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<Field>,
    pub preview: Preview,
}

impl DocumentType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Which fields the editor shows in list previews.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub select: PreviewSelect,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewSelect {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
}

impl Preview {
    pub fn title(title: &'static str) -> Self {
        Self {
            select: PreviewSelect {
                title,
                subtitle: None,
            },
        }
    }

    pub fn with_subtitle(title: &'static str, subtitle: &'static str) -> Self {
        Self {
            select: PreviewSelect {
                title,
                subtitle: Some(subtitle),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(rename = "validation", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    /// Shown only when a sibling field holds a given value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<VisibleWhen>,
}

impl Field {
    pub fn new(name: &'static str, title: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            title,
            kind,
            description: None,
            rules: Vec::new(),
            initial_value: None,
            read_only: false,
            visible_when: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn max_len(mut self, max: usize) -> Self {
        self.rules.push(Rule::MaxLength(max));
        self
    }

    pub fn describe(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    pub fn initial(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Hide the field unless sibling `field` equals `equals`.
    pub fn visible_when(mut self, field: &'static str, equals: &'static str) -> Self {
        self.visible_when = Some(VisibleWhen { field, equals });
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    pub fn max_length(&self) -> Option<usize> {
        self.rules.iter().find_map(|r| match r {
            Rule::MaxLength(n) => Some(*n),
            Rule::Required => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    MaxLength(usize),
}

#[derive(Debug, Clone, Serialize)]
pub struct VisibleWhen {
    pub field: &'static str,
    pub equals: &'static str,
}

impl VisibleWhen {
    /// Whether the condition hides the field inside `parent`.
    pub fn hides(&self, parent: &serde_json::Map<String, Value>) -> bool {
        parent.get(self.field).and_then(Value::as_str) != Some(self.equals)
    }
}

/// One entry of an enumerated option list.
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub title: &'static str,
    pub value: &'static str,
}

// ---------------------------------------------------------------------------
// Field kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    String {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        list: Vec<Choice>,
    },
    Text {
        rows: u32,
    },
    Slug {
        source: &'static str,
        #[serde(rename = "maxLength")]
        max_length: usize,
    },
    Number,
    Boolean,
    Url,
    Email,
    Image {
        hotspot: bool,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<Field>,
    },
    Reference {
        to: Vec<&'static str>,
    },
    Object {
        fields: Vec<Field>,
        #[serde(skip_serializing_if = "Option::is_none")]
        preview: Option<Preview>,
    },
    Array {
        of: Vec<FieldKind>,
    },
    /// Portable text block.
    Block,
}

impl FieldKind {
    pub fn string() -> Self {
        Self::String { list: Vec::new() }
    }

    /// String restricted to `(title, value)` choices.
    pub fn choice(options: &[(&'static str, &'static str)]) -> Self {
        Self::String {
            list: options
                .iter()
                .map(|&(title, value)| Choice { title, value })
                .collect(),
        }
    }

    pub fn text(rows: u32) -> Self {
        Self::Text { rows }
    }

    pub fn slug(source: &'static str) -> Self {
        Self::Slug {
            source,
            max_length: 96,
        }
    }

    pub fn image(fields: Vec<Field>) -> Self {
        Self::Image {
            hotspot: true,
            fields,
        }
    }

    pub fn reference(to: &'static str) -> Self {
        Self::Reference { to: vec![to] }
    }

    pub fn object(fields: Vec<Field>) -> Self {
        Self::Object {
            fields,
            preview: None,
        }
    }

    pub fn object_with_preview(fields: Vec<Field>, preview: Preview) -> Self {
        Self::Object {
            fields,
            preview: Some(preview),
        }
    }

    pub fn array_of(member: FieldKind) -> Self {
        Self::Array { of: vec![member] }
    }

    /// Rich text body: text blocks plus images with alt text.
    pub fn portable_text() -> Self {
        Self::Array {
            of: vec![
                Self::Block,
                Self::image(vec![Field::new("alt", "Alternative Text", Self::string())]),
            ],
        }
    }

    /// The `_type` an array member of this kind carries.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Text { .. } => "text",
            Self::Slug { .. } => "slug",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Url => "url",
            Self::Email => "email",
            Self::Image { .. } => "image",
            Self::Reference { .. } => "reference",
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::Block => "block",
        }
    }
}

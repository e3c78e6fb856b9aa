//! Portable text: the structured rich-text body of pages and services.
//!
//! A body is an ordered list of [`Block`]s. Text blocks hold styled spans and
//! annotation definitions; image blocks point at an uploaded asset.

use serde::{Deserialize, Serialize};

use crate::types::{Reference, null_default};

/// One entry of a portable text array, tagged by `_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageBlock),
    /// Any block type this site does not render.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl Block {
    /// A single-span paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Text(TextBlock {
            key: None,
            style: BlockStyle::Normal,
            list_item: None,
            level: None,
            children: vec![Span::plain(text)],
            mark_defs: Vec::new(),
        })
    }

    /// Array key, when present.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Text(b) => b.key.as_deref(),
            Self::Image(b) => b.key.as_deref(),
            Self::Unknown => None,
        }
    }

    pub fn set_key(&mut self, key: String) {
        match self {
            Self::Text(b) => b.key = Some(key),
            Self::Image(b) => b.key = Some(key),
            Self::Unknown => {}
        }
    }
}

/// Paragraph, heading, quote or list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<ListKind>,
    /// Nesting depth of a list item, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "null_default")]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    /// Styles the editor allows but the site renders as a paragraph.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// A run of text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_type", default = "Span::type_name")]
    kind: String,
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub text: String,
    /// Decorator names (`strong`, `em`, ...) or keys into the block's `markDefs`.
    #[serde(default, deserialize_with = "null_default")]
    pub marks: Vec<String>,
}

impl Span {
    fn type_name() -> String {
        "span".into()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::marked(text, Vec::new())
    }

    pub fn marked(text: impl Into<String>, marks: Vec<String>) -> Self {
        Self {
            kind: Self::type_name(),
            key: None,
            text: text.into(),
            marks,
        }
    }
}

/// Annotation definition referenced from span marks by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Embedded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

//! Shared types, error model, and configuration for the Aderyn site.
//!
//! This crate is the foundation depended on by all other Aderyn crates.
//! It provides:
//! - [`AderynError`]: the unified error type
//! - Content documents ([`Page`], [`Service`], [`SiteSettings`], [`Navigation`])
//!   and their portable text bodies ([`Block`])
//! - Configuration ([`AppConfig`], [`CmsConfig`], config loading)

pub mod blocks;
pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use blocks::{Block, BlockStyle, ImageBlock, ListKind, MarkDef, Span, TextBlock};
pub use config::{
    AppConfig, CmsConfig, CmsSettings, Credentials, DATASET_ENV, ServerConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, require_credentials,
};
pub use error::{AderynError, Result};
pub use types::{
    Address, ContactInfo, Document, NavItem, NavLink, NavSubItem, Navigation, Office, Page,
    Reference, Seo, Service, ServiceCategory, SiteSettings, Slug, SocialMedia, to_document_value,
};

//! Content layer for the Aderyn site.
//!
//! Ties the CMS client, fallback content and schema together: every page
//! lookup the site makes ([`content`]), listing helpers ([`catalog`],
//! [`navigation`]), and the seed migration ([`seed`], [`migrate`]).

pub mod catalog;
pub mod content;
pub mod fallback;
pub mod migrate;
pub mod navigation;
pub mod seed;

pub use content::{Body, HomeContent, Metadata, PageContent, ServiceContent, SiteContent};
pub use migrate::{MigrationReporter, MigrationSummary, SeedDocument, SilentReporter};
pub use navigation::{LinkTarget, MenuEntry};

//! The four document types editors work with.

mod navigation;
mod page;
mod service;
mod site_settings;

pub use navigation::navigation;
pub use page::page;
pub use service::service;
pub use site_settings::site_settings;

use crate::field::{Field, FieldKind};

/// Per-document search metadata.
pub(crate) fn seo_field(title: &'static str) -> Field {
    Field::new(
        "seo",
        title,
        FieldKind::object(vec![
            Field::new("metaTitle", "Meta Title", FieldKind::string()).max_len(60),
            Field::new("metaDescription", "Meta Description", FieldKind::text(3)).max_len(160),
        ]),
    )
}

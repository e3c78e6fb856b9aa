use std::sync::LazyLock;

use aderyn_shared::ServiceCategory;

use crate::field::{DocumentType, Field, FieldKind, Preview};
use crate::types::seo_field;

static LISTED: [ServiceCategory; 6] = ServiceCategory::LISTED;

/// `(label, tag)` for every listed category, in menu order.
static CATEGORY_CHOICES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    LISTED
        .iter()
        .filter_map(|c| Some((c.label()?, c.as_str())))
        .collect()
});

pub fn service() -> DocumentType {
    DocumentType {
        name: "service",
        title: "Service",
        fields: vec![
            Field::new("title", "Title", FieldKind::string()).required(),
            Field::new("slug", "Slug", FieldKind::slug("title")).required(),
            Field::new("category", "Category", FieldKind::choice(&CATEGORY_CHOICES)).required(),
            Field::new("description", "Short Description", FieldKind::text(3))
                .describe("Shown on service cards and as the fallback meta description")
                .max_len(200),
            Field::new("content", "Content", FieldKind::portable_text()),
            Field::new("order", "Order", FieldKind::Number).describe("Lower numbers sort first"),
            seo_field("SEO"),
        ],
        preview: Preview::with_subtitle("title", "category"),
    }
}

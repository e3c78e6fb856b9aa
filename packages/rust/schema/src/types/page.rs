use crate::field::{DocumentType, Field, FieldKind, Preview};
use crate::types::seo_field;

pub fn page() -> DocumentType {
    DocumentType {
        name: "page",
        title: "Page",
        fields: vec![
            Field::new("title", "Title", FieldKind::string()).required(),
            Field::new("slug", "Slug", FieldKind::slug("title")).required(),
            Field::new("content", "Content", FieldKind::portable_text()),
            Field::new("order", "Order", FieldKind::Number).describe("Lower numbers sort first"),
            Field::new("showInNavigation", "Show in Navigation", FieldKind::Boolean).initial(true),
            seo_field("SEO"),
        ],
        preview: Preview::with_subtitle("title", "slug.current"),
    }
}

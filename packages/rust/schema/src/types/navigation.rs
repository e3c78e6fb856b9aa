use crate::field::{DocumentType, Field, FieldKind, Preview};

const LINK_TYPES: [(&str, &str); 4] = [
    ("Page", "page"),
    ("Service", "service"),
    ("External URL", "external"),
    ("Custom Path", "custom"),
];

/// Link object shared by top-level items and sub-items. Each target field is
/// visible only while `type` selects it, and required then.
fn link_field(custom_hint: &'static str) -> Field {
    Field::new(
        "link",
        "Link",
        FieldKind::object(vec![
            Field::new("type", "Link Type", FieldKind::choice(&LINK_TYPES)).required(),
            Field::new("page", "Page", FieldKind::reference("page"))
                .visible_when("type", "page")
                .required(),
            Field::new("service", "Service", FieldKind::reference("service"))
                .visible_when("type", "service")
                .required(),
            Field::new("external", "External URL", FieldKind::Url)
                .visible_when("type", "external")
                .required(),
            Field::new("custom", "Custom Path", FieldKind::string())
                .describe(custom_hint)
                .visible_when("type", "custom")
                .required(),
        ]),
    )
    .required()
}

pub fn navigation() -> DocumentType {
    let sub_item = FieldKind::object_with_preview(
        vec![
            Field::new("title", "Title", FieldKind::string()).required(),
            link_field("e.g., /services/building-surveys"),
        ],
        Preview::title("title"),
    );

    let item = FieldKind::object_with_preview(
        vec![
            Field::new("title", "Title", FieldKind::string()).required(),
            link_field("e.g., /contact-us"),
            Field::new("subItems", "Sub Items", FieldKind::array_of(sub_item)),
        ],
        Preview::with_subtitle("title", "subItems.length"),
    );

    DocumentType {
        name: "navigation",
        title: "Navigation",
        fields: vec![
            Field::new("title", "Title", FieldKind::string())
                .initial("Main Navigation")
                .read_only(),
            Field::new("mainNavigation", "Main Navigation", FieldKind::array_of(item)),
        ],
        preview: Preview::title("title"),
    }
}

use crate::field::{DocumentType, Field, FieldKind, Preview};

pub fn site_settings() -> DocumentType {
    let address = FieldKind::object(vec![
        Field::new("building", "Building", FieldKind::string()),
        Field::new("street", "Street", FieldKind::string()),
        Field::new("city", "City", FieldKind::string()),
        Field::new("postcode", "Postcode", FieldKind::string()),
    ]);

    let office = FieldKind::object_with_preview(
        vec![
            Field::new("name", "Office Name", FieldKind::string()).required(),
            Field::new("address", "Address", address),
            Field::new("phone", "Phone", FieldKind::string()),
            Field::new("email", "Email", FieldKind::Email),
        ],
        Preview::with_subtitle("name", "address.city"),
    );

    DocumentType {
        name: "siteSettings",
        title: "Site Settings",
        fields: vec![
            Field::new("title", "Site Title", FieldKind::string()).required(),
            Field::new("description", "Site Description", FieldKind::text(3))
                .describe("Default description for SEO"),
            Field::new(
                "logo",
                "Logo",
                FieldKind::image(vec![Field::new("alt", "Alternative Text", FieldKind::string())]),
            ),
            Field::new(
                "contactInfo",
                "Contact Information",
                FieldKind::object(vec![
                    Field::new("email", "Email", FieldKind::Email),
                    Field::new("phone", "Phone", FieldKind::string()),
                ]),
            ),
            Field::new("offices", "Offices", FieldKind::array_of(office)),
            Field::new(
                "socialMedia",
                "Social Media",
                FieldKind::object(vec![
                    Field::new("linkedin", "LinkedIn URL", FieldKind::Url),
                    Field::new("twitter", "Twitter URL", FieldKind::Url),
                ]),
            ),
            Field::new(
                "seo",
                "Default SEO",
                FieldKind::object(vec![
                    Field::new("metaTitle", "Default Meta Title", FieldKind::string()),
                    Field::new("metaDescription", "Default Meta Description", FieldKind::text(3)),
                    Field::new("ogImage", "Default Social Share Image", FieldKind::image(vec![])),
                ]),
            ),
        ],
        preview: Preview::title("title"),
    }
}

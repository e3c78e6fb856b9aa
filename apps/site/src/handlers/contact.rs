//! Contact Page Handler

use axum::{extract::State, response::IntoResponse};

use aderyn_core::Metadata;
use aderyn_core::fallback::COMPANY_NAME;

use crate::handlers::layout_with_settings;
use crate::state::AppState;
use crate::templates::{ContactTemplate, office_cards};

/// Offices come from site settings, which fall back to the literal offices.
pub async fn contact(State(state): State<AppState>) -> impl IntoResponse {
    let (layout, settings) = layout_with_settings(&state).await;

    ContactTemplate {
        layout,
        meta: Metadata {
            title: format!("Contact Us - {COMPANY_NAME}"),
            description: Some(
                "Get in touch with Aderyn Building Consultancy. We have offices in Cardiff and \
Swansea and provide national coverage."
                    .to_string(),
            ),
        },
        offices: office_cards(&settings),
    }
}

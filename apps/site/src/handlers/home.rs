//! Home Page Handler

use axum::{extract::State, response::IntoResponse};

use aderyn_core::Metadata;
use aderyn_core::fallback::{HERO_DETAIL, HERO_LEAD, HERO_OFFICES, SITE_DESCRIPTION, SITE_META_TITLE};

use crate::handlers::layout_with_settings;
use crate::state::AppState;
use crate::templates::{HomeTemplate, cards, office_cards};

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let ((layout, settings), home) =
        tokio::join!(layout_with_settings(&state), state.content().home());

    HomeTemplate {
        layout,
        meta: Metadata {
            title: SITE_META_TITLE.to_string(),
            description: Some(SITE_DESCRIPTION.to_string()),
        },
        intro_html: home.intro.as_deref().map(|blocks| state.render(blocks)),
        hero_lead: HERO_LEAD,
        hero_detail: HERO_DETAIL,
        hero_offices: HERO_OFFICES,
        featured: cards(&home.featured),
        has_more: home.has_more,
        offices: office_cards(&settings),
    }
}

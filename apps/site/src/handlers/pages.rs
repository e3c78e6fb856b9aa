//! Content Page Handler

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::handlers::{layout, not_found};
use crate::state::AppState;
use crate::templates::{PageTemplate, body_html};

/// Handler for `/{slug}`: CMS page, else the literal page, else 404.
pub async fn page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let (layout, page) = tokio::join!(layout(&state), state.content().page(&slug));

    let Some(page) = page else {
        return not_found::render(layout, "Page Not Found");
    };

    PageTemplate {
        layout,
        body_html: body_html(&state, &page.body),
        title: page.title,
        meta: page.metadata,
    }
    .into_response()
}

//! Not Found Handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use aderyn_core::Metadata;

use crate::handlers::layout;
use crate::state::AppState;
use crate::templates::{Layout, NotFoundTemplate};

/// Router fallback for paths no route matches.
pub async fn fallback(State(state): State<AppState>) -> Response {
    render(layout(&state).await, "Page Not Found")
}

/// 404 page titled `title`.
pub fn render(layout: Layout, title: &str) -> Response {
    let page = NotFoundTemplate {
        layout,
        meta: Metadata {
            title: title.to_string(),
            description: None,
        },
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

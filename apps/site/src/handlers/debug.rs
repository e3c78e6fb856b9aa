//! Debug Page Handler
//!
//! Shows the resolved CMS connection. Only compiled into debug builds.

use axum::{extract::State, response::IntoResponse};

use aderyn_core::Metadata;

use crate::handlers::layout;
use crate::state::AppState;
use crate::templates::DebugTemplate;

pub async fn debug(State(state): State<AppState>) -> impl IntoResponse {
    DebugTemplate {
        layout: layout(&state).await,
        meta: Metadata {
            title: "Debug Information".to_string(),
            description: None,
        },
        connection: state.connection().clone(),
        rendered_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    }
}

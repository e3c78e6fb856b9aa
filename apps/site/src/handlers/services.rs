//! Services Handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use aderyn_core::Metadata;
use aderyn_core::catalog::{category_label, group_by_category};
use aderyn_core::fallback::COMPANY_NAME;
use aderyn_shared::ServiceCategory;

use crate::handlers::{layout, not_found};
use crate::state::AppState;
use crate::templates::{ServiceTemplate, ServicesTemplate, body_html, cards};

const LISTING_DESCRIPTION: &str = "Comprehensive building surveying and property services including \
building surveys, party wall matters, dilapidations, and project delivery.";

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Category tag, e.g. `landlord-tenant`.
    pub category: Option<String>,
}

/// Handler for the services listing, optionally narrowed to one category.
pub async fn services_index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let category = params
        .category
        .filter(|tag| !tag.trim().is_empty())
        .map(ServiceCategory::from);

    let content = state.content();
    let services = async {
        match &category {
            Some(category) => content.services_in(category).await,
            None => content.services().await,
        }
    };
    let (layout, services) = tokio::join!(layout(&state), services);

    ServicesTemplate {
        layout,
        meta: Metadata {
            title: format!("Services - {COMPANY_NAME}"),
            description: Some(LISTING_DESCRIPTION.to_string()),
        },
        sections: group_by_category(services).into_iter().map(Into::into).collect(),
        filter: category.as_ref().map(category_label),
    }
}

/// Handler for `/services/{slug}`.
pub async fn service(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let (layout, service) = tokio::join!(layout(&state), state.content().service(&slug));

    let Some(service) = service else {
        return not_found::render(layout, "Service Not Found");
    };

    ServiceTemplate {
        layout,
        body_html: body_html(&state, &service.body),
        related: cards(&service.related),
        title: service.title,
        description: service.description,
        meta: service.metadata,
    }
    .into_response()
}

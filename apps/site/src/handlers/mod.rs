//! Request Handlers
//!
//! Every page fetches its header/footer data concurrently with its own content.

pub mod contact;
#[cfg(debug_assertions)]
pub mod debug;
pub mod home;
pub mod not_found;
pub mod pages;
pub mod services;

use aderyn_shared::SiteSettings;

use crate::{state::AppState, templates::Layout};

/// Layout data plus the settings it was built from.
pub(crate) async fn layout_with_settings(state: &AppState) -> (Layout, SiteSettings) {
    let content = state.content();
    let (settings, navigation) = tokio::join!(content.site_settings(), content.navigation());
    (Layout::new(&settings, &navigation), settings)
}

pub(crate) async fn layout(state: &AppState) -> Layout {
    layout_with_settings(state).await.0
}

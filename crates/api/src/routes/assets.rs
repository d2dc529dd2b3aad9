//! Route definitions for the asset index.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset index route.
///
/// The trailing slash is part of the client contract; `/api/assets`
/// (without it) is not routed.
pub fn router() -> Router<AppState> {
    Router::new().route("/assets/", get(assets::list_assets))
}

pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /assets/    complete asset index snapshot (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(assets::router())
}

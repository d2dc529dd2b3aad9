//! Handler for the asset index endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use stickerlab_core::scan_index;

use crate::config::PUBLIC_ASSETS_PREFIX;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/assets/
///
/// Scan the asset tree and return the complete grouped snapshot. The scan
/// runs fresh on every request; nothing is cached. Missing category
/// directories or a missing guide image degrade to empty data, so the only
/// error path is a real filesystem failure.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let index = scan_index(
        &state.config.assets_dir(),
        &state.config.categories,
        PUBLIC_ASSETS_PREFIX,
    )?;

    let groups: usize = index.categories.values().map(Vec::len).sum();
    tracing::debug!(
        categories = index.categories.len(),
        groups,
        guide = index.meta.guide.is_some(),
        "Asset scan complete",
    );

    Ok(Json(index))
}

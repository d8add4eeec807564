use crate::pipeline;
use crate::AppState;
use axum::{extract::State, Json};

/// Serves the rendered marker layer. The underlying pipeline runs at
/// most once; every request after the first returns the cached layer,
/// including when the snapshot fetch failed and the layer is empty.
pub async fn get_markers(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    let layer = app_state
        .marker_layer
        .get_or_init(|| pipeline::run_once(&app_state.snapshot_service))
        .await;

    Json(serde_json::json!({
        "success": true,
        "data": {
            "markers": layer.markers(),
            "count": layer.len()
        }
    }))
}

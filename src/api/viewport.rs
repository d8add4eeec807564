use crate::AppState;
use axum::{extract::State, Json};

/// Initial view configuration consumed once by the map page at
/// construction time.
pub async fn get_viewport(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    let config = &app_state.config;

    Json(serde_json::json!({
        "success": true,
        "data": {
            "center": [config.map_center_lat, config.map_center_lng],
            "zoom": config.map_zoom,
            "base_map_provider": config.base_map_provider
        }
    }))
}

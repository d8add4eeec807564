use crate::models::country::CountryRecord;
use crate::models::marker::MarkerLayer;
use crate::services::fetch::{FetchError, SnapshotService};
use crate::services::render::render_marker;
use crate::services::transform::to_features;
use tracing::{error, info};

/// Transform, classify and render one snapshot into a marker layer.
/// Pure with respect to its input: identical records always produce an
/// identical layer.
pub fn build_marker_layer(records: &[CountryRecord]) -> MarkerLayer {
    let features = to_features(records);

    let mut layer = MarkerLayer::new();
    for feature in &features {
        layer.push(render_marker(feature));
    }

    layer
}

/// Fail-closed adapter around the fetch result: any fetch, timeout or
/// parse failure is logged and yields an empty layer. The map page then
/// renders with zero markers instead of an error surface.
pub fn layer_from_snapshot(snapshot: Result<Vec<CountryRecord>, FetchError>) -> MarkerLayer {
    match snapshot {
        Ok(records) => {
            let layer = build_marker_layer(&records);
            info!(
                "Rendered {} markers from {} country records",
                layer.len(),
                records.len()
            );
            layer
        }
        Err(e) => {
            error!("Failed to fetch country snapshot: {}", e);
            MarkerLayer::new()
        }
    }
}

/// The single fetch-and-render pass of the service's lifetime.
pub async fn run_once(snapshot_service: &SnapshotService) -> MarkerLayer {
    info!("Fetching country snapshot from {}", snapshot_service.snapshot_url());
    layer_from_snapshot(snapshot_service.fetch_countries().await)
}

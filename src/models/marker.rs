use crate::services::severity::SeverityTier;
use serde::Serialize;

/// One rendered map marker. Owned by the map page once served; the
/// service never mutates a marker after it is pushed into the layer.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    /// Visible label on the marker itself (abbreviated case count).
    pub label: String,
    /// Outer style class, `icon-marker <tier>-risk`.
    pub css_class: String,
    pub tooltip_html: String,
    pub tier: SeverityTier,
}

/// Append-only collection of markers built once per snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MarkerLayer {
    markers: Vec<MapMarker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, marker: MapMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

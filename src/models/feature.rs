use crate::models::country::CountryRecord;
use serde::Serialize;

/// GeoJSON-shaped point feature derived from one country record.
#[derive(Debug, Clone, Serialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// Lng/lat order, as GeoJSON requires.
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn point(lng: f64, lat: f64) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates: [lng, lat],
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// All original record fields plus the flag hoisted out of the nested
/// location info, mirroring the upstream property bag.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProperties {
    #[serde(flatten)]
    pub record: CountryRecord,
    pub flag: Option<String>,
}

use crate::models::country::CountryRecord;
use crate::models::feature::{FeatureProperties, GeoFeature, PointGeometry};

/// Maps country records to geo features, preserving snapshot order.
/// Records without finite coordinates are skipped: a country the
/// upstream source cannot place has nowhere to render.
pub fn to_features(records: &[CountryRecord]) -> Vec<GeoFeature> {
    records.iter().filter_map(to_feature).collect()
}

fn to_feature(record: &CountryRecord) -> Option<GeoFeature> {
    let lat = record.country_info.lat.filter(|v| v.is_finite())?;
    let lng = record.country_info.lng.filter(|v| v.is_finite())?;

    Some(GeoFeature {
        feature_type: "Feature".to_string(),
        geometry: PointGeometry::point(lng, lat),
        properties: FeatureProperties {
            flag: record.country_info.flag.clone(),
            record: record.clone(),
        },
    })
}

//! End-to-end pipeline behavior: transform completeness, fail-closed
//! degradation, deserialization defaults and the one-shot guard.

use covidmapsrv::models::country::{CountryLocation, CountryRecord};
use covidmapsrv::models::marker::MarkerLayer;
use covidmapsrv::pipeline::{build_marker_layer, layer_from_snapshot};
use covidmapsrv::services::fetch::FetchError;
use covidmapsrv::services::severity::SeverityTier;
use covidmapsrv::services::transform::to_features;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::OnceCell;

fn located_record(country: &str, lat: f64, lng: f64, cases: u64) -> CountryRecord {
    CountryRecord {
        country: country.to_string(),
        country_info: CountryLocation {
            lat: Some(lat),
            lng: Some(lng),
            flag: Some(format!("https://example.org/{}.png", country)),
        },
        cases,
        deaths: 10,
        recovered: 100,
        active: 50,
        today_cases: 5,
        today_deaths: 0,
        updated: None,
    }
}

#[test]
fn transform_produces_one_feature_per_located_record() {
    let records = vec![
        located_record("A", 1.0, 2.0, 100),
        located_record("B", 3.0, 4.0, 2000),
        located_record("C", 5.0, 6.0, 20000),
    ];

    let features = to_features(&records);

    assert_eq!(features.len(), records.len());
    for (feature, record) in features.iter().zip(&records) {
        assert_eq!(feature.properties.record.country, record.country);
        assert_eq!(feature.properties.record.cases, record.cases);
        assert_eq!(feature.properties.flag, record.country_info.flag);
        assert_eq!(feature.geometry.lat(), record.country_info.lat.unwrap());
        assert_eq!(feature.geometry.lng(), record.country_info.lng.unwrap());
    }
}

#[test]
fn transform_skips_records_without_usable_coordinates() {
    let mut unplaced = located_record("Nowhere", 0.0, 0.0, 100);
    unplaced.country_info.lat = None;
    let mut degenerate = located_record("NaN-land", 0.0, 0.0, 100);
    degenerate.country_info.lng = Some(f64::NAN);

    let records = vec![
        located_record("A", 1.0, 2.0, 100),
        unplaced,
        degenerate,
        located_record("B", 3.0, 4.0, 200),
    ];

    let features = to_features(&records);

    assert_eq!(features.len(), 2);
    assert_eq!(features[0].properties.record.country, "A");
    assert_eq!(features[1].properties.record.country, "B");
}

#[test]
fn records_deserialize_with_zero_defaults_for_missing_counts() -> anyhow::Result<()> {
    let json = r#"[
        {"country": "X", "countryInfo": {"lat": 1.5, "long": 2.5}},
        {"country": "Y", "countryInfo": {"lat": 3.0, "long": 4.0, "flag": "f.png"},
         "cases": 42, "todayDeaths": 1}
    ]"#;

    let records: Vec<CountryRecord> = serde_json::from_str(json)?;

    assert_eq!(records[0].cases, 0);
    assert_eq!(records[0].deaths, 0);
    assert_eq!(records[0].today_cases, 0);
    assert_eq!(records[0].updated, None);
    assert_eq!(records[0].country_info.flag, None);
    assert_eq!(records[1].cases, 42);
    assert_eq!(records[1].today_deaths, 1);
    Ok(())
}

#[test]
fn fetch_failures_yield_an_empty_layer() {
    let errors = vec![
        FetchError::Http("connection refused".to_string()),
        FetchError::Timeout(30),
        FetchError::Parse("expected a top-level array, got an object".to_string()),
    ];

    for error in errors {
        let layer = layer_from_snapshot(Err(error));
        assert!(layer.is_empty());
    }
}

#[test]
fn single_country_snapshot_renders_one_high_tier_marker() {
    let record = CountryRecord {
        country: "X".to_string(),
        country_info: CountryLocation {
            lat: Some(10.0),
            lng: Some(20.0),
            flag: None,
        },
        cases: 12000,
        deaths: 300,
        recovered: 11000,
        active: 700,
        today_cases: 50,
        today_deaths: 2,
        updated: None,
    };

    let layer = layer_from_snapshot(Ok(vec![record]));

    assert_eq!(layer.len(), 1);
    let marker = &layer.markers()[0];
    assert_eq!(marker.lat, 10.0);
    assert_eq!(marker.lng, 20.0);
    assert_eq!(marker.tier, SeverityTier::High);
    assert_eq!(marker.label, "12,k+");
    assert!(marker
        .tooltip_html
        .contains("<strong>Deaths today:</strong> <span class=\"danger bold\">2</span>"));
}

#[test]
fn identical_snapshots_render_identical_layers() {
    let records = vec![
        located_record("A", 1.0, 2.0, 100),
        located_record("B", 3.0, 4.0, 20000),
    ];

    let first = serde_json::to_value(build_marker_layer(&records)).unwrap();
    let second = serde_json::to_value(build_marker_layer(&records)).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn layer_cell_runs_the_pipeline_exactly_once() {
    let runs = AtomicUsize::new(0);
    let cell: OnceCell<MarkerLayer> = OnceCell::new();
    let records = vec![located_record("A", 1.0, 2.0, 100)];

    for _ in 0..3 {
        let layer = cell
            .get_or_init(|| async {
                runs.fetch_add(1, Ordering::SeqCst);
                build_marker_layer(&records)
            })
            .await;
        assert_eq!(layer.len(), 1);
    }

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

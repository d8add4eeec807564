use serde::{Deserialize, Serialize};

/// One per-country entry from the snapshot endpoint. Numeric fields
/// default to zero when absent so that classification and rendering
/// never see a missing count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub country: String,
    #[serde(default, rename = "countryInfo")]
    pub country_info: CountryLocation,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default, rename = "todayCases")]
    pub today_cases: u64,
    #[serde(default, rename = "todayDeaths")]
    pub today_deaths: u64,
    /// Epoch milliseconds of the last upstream refresh.
    #[serde(default)]
    pub updated: Option<u64>,
}

/// Nested location info. Coordinates and flag may be missing for
/// territories the upstream source cannot place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryLocation {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, rename = "long")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub flag: Option<String>,
}

use crate::models::country::CountryRecord;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Snapshot request failed: {0}")]
    Http(String),
    #[error("Snapshot request timed out after {0} seconds")]
    Timeout(u64),
    #[error("Snapshot body is not a JSON array of countries: {0}")]
    Parse(String),
}

/// Issues the single outbound GET for the per-country snapshot.
pub struct SnapshotService {
    client: reqwest::Client,
    snapshot_url: String,
    timeout_secs: u64,
}

impl SnapshotService {
    pub fn new(snapshot_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            snapshot_url: snapshot_url.to_string(),
            timeout_secs,
        })
    }

    pub fn snapshot_url(&self) -> &str {
        &self.snapshot_url
    }

    /// One request, one parse. Transport failures, non-success statuses,
    /// non-JSON bodies and non-array payloads all surface as `FetchError`;
    /// the caller decides how to degrade.
    pub async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, FetchError> {
        let response = self
            .client
            .get(&self.snapshot_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(format!(
                "HTTP status {} from {}",
                response.status(),
                self.snapshot_url
            )));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let value: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        if !value.is_array() {
            return Err(FetchError::Parse(format!(
                "expected a top-level array, got {}",
                json_type_name(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
    }

    fn transport_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Http(error.to_string())
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

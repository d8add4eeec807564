use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub server_port: u16,
    pub snapshot_url: String,
    pub fetch_timeout_secs: u64,
    pub map_center_lat: f64,
    pub map_center_lng: f64,
    pub map_zoom: u8,
    pub base_map_provider: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            snapshot_url: env::var("SNAPSHOT_URL")
                .unwrap_or_else(|_| "https://corona.lmao.ninja/countries".to_string()),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            map_center_lat: env::var("MAP_CENTER_LAT")
                .unwrap_or_else(|_| "38.9072".to_string())
                .parse()
                .unwrap_or(38.9072),
            map_center_lng: env::var("MAP_CENTER_LNG")
                .unwrap_or_else(|_| "-77.0369".to_string())
                .parse()
                .unwrap_or(-77.0369),
            map_zoom: env::var("MAP_ZOOM")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
            base_map_provider: env::var("BASE_MAP_PROVIDER")
                .unwrap_or_else(|_| "OpenStreetMap".to_string()),
        })
    }
}

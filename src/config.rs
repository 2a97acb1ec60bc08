//! Application Configuration
//!
//! Endpoints and UI constants. Base URLs can be overridden at build time
//! with `COLETA_API_URL` and `COLETA_DIRECTORY_URL`.

use std::time::Duration;

use pin_map::TileSource;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_DIRECTORY_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection point backend (items, points)
    pub api_url: String,
    /// IBGE localidades service (estados, municipios)
    pub directory_url: String,
    pub tiles: TileSource,
    pub map_zoom: f64,
    /// How long the success overlay stays up before going home
    pub confirmation_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            tiles: TileSource {
                url_template: OSM_TILES.to_string(),
                attribution: OSM_ATTRIBUTION.to_string(),
            },
            map_zoom: 15.0,
            confirmation_delay: Duration::from_millis(2000),
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("COLETA_API_URL"), option_env!("COLETA_DIRECTORY_URL"))
    }

    fn with_overrides(api_url: Option<&str>, directory_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = directory_url.filter(|u| !u.is_empty()) {
            config.directory_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

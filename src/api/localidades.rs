//! IBGE Directory Service
//!
//! Region (UF) and city listings from the localidades API.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use web_sys::AbortSignal;

use super::{endpoint, get_json, ApiError};
use crate::config::AppConfig;
use crate::models::{CityDescriptor, CityName, RegionCode, RegionDescriptor};

/// Characters that cannot appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn regions_url(directory_url: &str) -> String {
    endpoint(directory_url, "estados")
}

fn cities_url(directory_url: &str, region: &RegionCode) -> String {
    let segment = utf8_percent_encode(&region.0, PATH_SEGMENT);
    endpoint(directory_url, &format!("estados/{}/municipios", segment))
}

pub async fn list_regions(config: &AppConfig, abort: Option<&AbortSignal>) -> Result<Vec<RegionCode>, ApiError> {
    let regions: Vec<RegionDescriptor> = get_json(&regions_url(&config.directory_url), abort).await?;
    Ok(regions.into_iter().map(|r| r.sigla).collect())
}

pub async fn list_cities(
    config: &AppConfig,
    region: &RegionCode,
    abort: Option<&AbortSignal>,
) -> Result<Vec<CityName>, ApiError> {
    let cities: Vec<CityDescriptor> = get_json(&cities_url(&config.directory_url, region), abort).await?;
    Ok(cities.into_iter().map(|c| c.nome).collect())
}

//! Item Catalog

use web_sys::AbortSignal;

use super::{endpoint, get_json, ApiError};
use crate::config::AppConfig;
use crate::models::Item;

pub async fn list_items(config: &AppConfig, abort: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
    get_json(&endpoint(&config.api_url, "items"), abort).await
}

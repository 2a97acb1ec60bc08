//! Collection Point Registration

use super::{endpoint, post_json, ApiError};
use crate::config::AppConfig;
use crate::models::SubmissionRecord;

/// Register a collection point. Success is any 2xx; the response body is
/// only logged.
pub async fn create_point(config: &AppConfig, record: &SubmissionRecord) -> Result<(), ApiError> {
    let response = post_json(&endpoint(&config.api_url, "points"), record).await?;
    match response.json::<serde_json::Value>().await {
        Ok(body) => log::debug!("[api] Point registered: {}", body),
        Err(_) => log::debug!("[api] Point registered (status {})", response.status()),
    }
    Ok(())
}

//! Device Geolocation
//!
//! One-shot position read wrapped as a future.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::models::GeoCoordinate;

#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    /// No window, or the browser has no geolocation API
    #[error("Geolocation unavailable")]
    Unavailable,
    /// Permission denied, position unavailable or timeout (codes 1-3)
    #[error("Geolocation failed (code {code}): {message}")]
    Failed { code: u16, message: String },
    /// The resolved position had no usable `coords.latitude/longitude`
    #[error("Geolocation returned no coordinates")]
    MissingCoordinates,
}

impl GeolocationError {
    fn from_js(value: &JsValue) -> Self {
        let code = property(value, "code").and_then(|v| v.as_f64()).unwrap_or(0.0) as u16;
        let message = property(value, "message").and_then(|v| v.as_string()).unwrap_or_default();
        GeolocationError::Failed { code, message }
    }
}

fn property(value: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Both parts must be present and finite
fn coordinate_from(latitude: Option<f64>, longitude: Option<f64>) -> Result<GeoCoordinate, GeolocationError> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Ok(GeoCoordinate::new(lat, lng)),
        _ => Err(GeolocationError::MissingCoordinates),
    }
}

/// Read `position.coords` without the typed `GeolocationPosition` binding
fn read_position(position: &JsValue) -> Result<GeoCoordinate, GeolocationError> {
    let coords = property(position, "coords").ok_or(GeolocationError::MissingCoordinates)?;
    let number = |name: &str| property(&coords, name).and_then(|v| v.as_f64());
    coordinate_from(number("latitude"), number("longitude"))
}

/// Ask the browser for the current position
pub async fn current_position() -> Result<GeoCoordinate, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unavailable)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unavailable)?;

    let mut request_error = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            request_error = Some(e);
        }
    });
    if let Some(e) = request_error {
        return Err(GeolocationError::from_js(&e));
    }

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| GeolocationError::from_js(&e))?;
    read_position(&position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_from_complete_pair() {
        let position = coordinate_from(Some(-23.5), Some(-46.6)).unwrap();
        assert_eq!(position, GeoCoordinate::new(-23.5, -46.6));
    }

    #[test]
    fn test_coordinate_from_rejects_missing_or_nan() {
        assert!(matches!(coordinate_from(None, Some(1.0)), Err(GeolocationError::MissingCoordinates)));
        assert!(matches!(coordinate_from(Some(1.0), None), Err(GeolocationError::MissingCoordinates)));
        assert!(matches!(coordinate_from(Some(f64::NAN), Some(1.0)), Err(GeolocationError::MissingCoordinates)));
    }
}

//! Frontend Models
//!
//! Data structures exchanged with the backend and the directory service.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use pin_map::LatLng;
use serde::{Deserialize, Serialize};

/// Collectable material category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    #[serde(alias = "img_url")]
    pub image_url: String,
}

/// State abbreviation (UF) as returned by the directory service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(pub String);

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// City name, only meaningful together with the region that listed it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(pub String);

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory service region entry
#[derive(Debug, Clone, Deserialize)]
pub struct RegionDescriptor {
    pub sigla: RegionCode,
}

/// Directory service city entry
#[derive(Debug, Clone, Deserialize)]
pub struct CityDescriptor {
    pub nome: CityName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const ZERO: GeoCoordinate = GeoCoordinate { latitude: 0.0, longitude: 0.0 };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<LatLng> for GeoCoordinate {
    fn from(p: LatLng) -> Self {
        Self::new(p.lat, p.lng)
    }
}

impl From<GeoCoordinate> for LatLng {
    fn from(c: GeoCoordinate) -> Self {
        LatLng::new(c.latitude, c.longitude)
    }
}

/// Free-text entity data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Which text input an edit belongs to, keyed by the input's `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "whatsapp" => Ok(FormField::Whatsapp),
            other => Err(format!("unknown form field: {}", other)),
        }
    }
}

impl FormFields {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Whatsapp => self.whatsapp = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Whatsapp => &self.whatsapp,
        }
    }
}

/// Ids of the items picked for a collection point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedItemSet(BTreeSet<u32>);

impl SelectedItemSet {
    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: u32) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<u32> for SelectedItemSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Value the backend receives for a region or city left on its placeholder
pub const UNSELECTED: &str = "0";

fn or_unselected<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Serialize,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(UNSELECTED),
    }
}

/// Body of `POST points`, field names as the backend expects them.
/// A missing region or city goes out as `"0"`, never `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    #[serde(rename = "uf", serialize_with = "or_unselected")]
    pub region_code: Option<RegionCode>,
    #[serde(rename = "city", serialize_with = "or_unselected")]
    pub city_name: Option<CityName>,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "long")]
    pub longitude: f64,
    #[serde(rename = "items")]
    pub item_ids: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_accepts_both_image_field_names() {
        let a: Item = serde_json::from_str(r#"{"id":1,"title":"Lâmpadas","image_url":"http://x/a.svg"}"#).unwrap();
        let b: Item = serde_json::from_str(r#"{"id":1,"title":"Lâmpadas","img_url":"http://x/a.svg"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.image_url, "http://x/a.svg");
    }

    #[test]
    fn test_directory_descriptors() {
        let regions: Vec<RegionDescriptor> =
            serde_json::from_str(r#"[{"id":35,"sigla":"SP","nome":"São Paulo"},{"id":33,"sigla":"RJ","nome":"Rio de Janeiro"}]"#).unwrap();
        let codes: Vec<RegionCode> = regions.into_iter().map(|r| r.sigla).collect();
        assert_eq!(codes, vec![RegionCode("SP".into()), RegionCode("RJ".into())]);

        let cities: Vec<CityDescriptor> = serde_json::from_str(r#"[{"id":3550308,"nome":"São Paulo"}]"#).unwrap();
        assert_eq!(cities[0].nome.to_string(), "São Paulo");
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let original: SelectedItemSet = [1, 3].into_iter().collect();
        for id in [1, 2, 3, 7] {
            let mut set = original.clone();
            set.toggle(id);
            assert_ne!(set, original);
            set.toggle(id);
            assert_eq!(set, original);
        }
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut set = SelectedItemSet::default();
        set.toggle(4);
        set.toggle(2);
        assert_eq!(set.to_vec(), vec![2, 4]);
        assert!(set.contains(4));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_form_field_from_input_name() {
        for field in [FormField::Name, FormField::Email, FormField::Whatsapp] {
            assert_eq!(field.input_name().parse::<FormField>(), Ok(field));
        }
        assert!("phone".parse::<FormField>().is_err());
    }

    #[test]
    fn test_submission_record_wire_names() {
        let record = SubmissionRecord {
            name: "Acme".into(),
            email: "a@b.co".into(),
            whatsapp: "123".into(),
            region_code: Some(RegionCode("SP".into())),
            city_name: Some(CityName("Campinas".into())),
            latitude: -22.9,
            longitude: -47.06,
            item_ids: vec![1, 3],
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Acme",
                "email": "a@b.co",
                "whatsapp": "123",
                "uf": "SP",
                "city": "Campinas",
                "lat": -22.9,
                "long": -47.06,
                "items": [1, 3],
            })
        );
    }

    #[test]
    fn test_unselected_location_is_sent_as_placeholder() {
        let record = SubmissionRecord {
            name: "Acme".into(),
            email: String::new(),
            whatsapp: String::new(),
            region_code: None,
            city_name: None,
            latitude: 0.0,
            longitude: 0.0,
            item_ids: vec![],
        };

        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(body["uf"], json!("0"));
        assert_eq!(body["city"], json!("0"));
    }

    #[test]
    fn test_coordinate_conversion() {
        let c = GeoCoordinate::from(LatLng::new(1.0, 2.0));
        assert_eq!(c, GeoCoordinate::new(1.0, 2.0));
        assert_eq!(LatLng::from(c), LatLng::new(1.0, 2.0));
        assert!(GeoCoordinate::default().is_zero());
    }
}

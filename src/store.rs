//! Registration Form Store
//!
//! All mutable state of the create-point page, held in a
//! `reactive_stores` store for field-level reactivity. The transitions
//! are plain methods so the page only wires events to them.

use reactive_stores::Store;

use crate::models::{
    CityName, FormField, FormFields, GeoCoordinate, Item, RegionCode, SelectedItemSet, SubmissionRecord,
};

/// Where the page is in the submit flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Write succeeded, confirmation overlay is showing
    Confirmed,
}

/// A city list request, keyed by the region it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    pub region: RegionCode,
}

/// Outcome of picking a region in the select
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionChange {
    /// Same region as before, keep the current cities and any request in flight
    Unchanged,
    /// Placeholder picked, nothing to fetch
    Cleared,
    Fetch(CityQuery),
}

/// Create-point page state
#[derive(Clone, Debug, Default, Store)]
pub struct RegistrationState {
    /// Item catalog from the backend
    pub items: Vec<Item>,
    /// Region codes from the directory service
    pub regions: Vec<RegionCode>,
    /// Cities of `selected_region`
    pub cities: Vec<CityName>,
    /// Device position, used as map center
    pub initial_position: GeoCoordinate,
    /// Last map click, zero until the user clicks
    pub selected_position: GeoCoordinate,
    pub selected_region: Option<RegionCode>,
    pub selected_city: Option<CityName>,
    pub selected_items: SelectedItemSet,
    pub fields: FormFields,
    pub status: SubmissionStatus,
}

impl RegistrationState {
    pub fn set_field(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
    }

    pub fn toggle_item(&mut self, id: u32) {
        self.selected_items.toggle(id);
    }

    /// Map clicks replace the pin, never accumulate
    pub fn click_map(&mut self, position: GeoCoordinate) {
        self.selected_position = position;
    }

    /// Pin shown on the map and sent on submit: the clicked position, or
    /// the device position until the first click
    pub fn marker_position(&self) -> GeoCoordinate {
        if self.selected_position.is_zero() {
            self.initial_position
        } else {
            self.selected_position
        }
    }

    /// Change the selected region.
    ///
    /// Cities and the selected city belong to the previous region, so both
    /// are cleared right away.
    pub fn select_region(&mut self, region: Option<RegionCode>) -> RegionChange {
        if region == self.selected_region {
            return RegionChange::Unchanged;
        }
        self.selected_region = region.clone();
        self.cities.clear();
        self.selected_city = None;
        match region {
            Some(region) => RegionChange::Fetch(CityQuery { region }),
            None => RegionChange::Cleared,
        }
    }

    /// Apply a city list if it still belongs to the selected region.
    /// Returns false when the response was stale and got dropped.
    pub fn apply_cities(&mut self, query: &CityQuery, cities: Vec<CityName>) -> bool {
        if self.selected_region.as_ref() != Some(&query.region) {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn select_city(&mut self, city: Option<CityName>) {
        self.selected_city = city;
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Confirmed
    }

    pub fn record(&self) -> SubmissionRecord {
        let position = self.marker_position();
        SubmissionRecord {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            whatsapp: self.fields.whatsapp.clone(),
            region_code: self.selected_region.clone(),
            city_name: self.selected_city.clone(),
            latitude: position.latitude,
            longitude: position.longitude,
            item_ids: self.selected_items.to_vec(),
        }
    }

    /// Start a submit. Returns the record to send, or None while a
    /// previous submit is still in flight or being confirmed.
    pub fn begin_submit(&mut self) -> Option<SubmissionRecord> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.record())
    }

    pub fn submit_succeeded(&mut self) {
        self.status = SubmissionStatus::Confirmed;
    }

    /// Back to idle with everything the user entered kept for a retry
    pub fn submit_failed(&mut self) {
        self.status = SubmissionStatus::Idle;
    }

    /// Confirmation delay is over. Returns true if the page should now
    /// navigate home.
    pub fn finish_confirmation(&mut self) -> bool {
        if self.status != SubmissionStatus::Confirmed {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

/// Type alias for the store
pub type RegistrationStore = Store<RegistrationState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str) -> RegionCode {
        RegionCode(code.to_string())
    }

    fn city(name: &str) -> CityName {
        CityName(name.to_string())
    }

    fn filled_state() -> RegistrationState {
        let mut state = RegistrationState::default();
        state.set_field(FormField::Name, "Acme".into());
        state.set_field(FormField::Email, "a@b.co".into());
        state.set_field(FormField::Whatsapp, "123".into());
        state.toggle_item(1);
        state.toggle_item(3);
        let RegionChange::Fetch(query) = state.select_region(Some(region("SP"))) else {
            panic!("new region should fetch cities");
        };
        state.apply_cities(&query, vec![city("Campinas"), city("Santos")]);
        state.select_city(Some(city("Santos")));
        state
    }

    #[test]
    fn test_new_region_issues_one_scoped_query() {
        let mut state = RegistrationState::default();

        let change = state.select_region(Some(region("MG")));
        assert_eq!(change, RegionChange::Fetch(CityQuery { region: region("MG") }));

        // Same region again: nothing to fetch
        assert_eq!(state.select_region(Some(region("MG"))), RegionChange::Unchanged);
    }

    #[test]
    fn test_placeholder_region_clears_without_query() {
        let mut state = filled_state();
        assert_eq!(state.select_region(None), RegionChange::Cleared);
        assert_eq!(state.selected_region, None);
        assert!(state.cities.is_empty());
        assert_eq!(state.selected_city, None);
    }

    #[test]
    fn test_region_change_clears_stale_cities() {
        let mut state = filled_state();
        assert_eq!(state.cities.len(), 2);

        state.select_region(Some(region("RJ")));
        assert!(state.cities.is_empty());
        assert_eq!(state.selected_city, None);
    }

    #[test]
    fn test_out_of_order_city_response_is_dropped() {
        let mut state = RegistrationState::default();
        let sp = CityQuery { region: region("SP") };
        let rj = CityQuery { region: region("RJ") };
        assert_eq!(state.select_region(Some(region("SP"))), RegionChange::Fetch(sp.clone()));
        assert_eq!(state.select_region(Some(region("RJ"))), RegionChange::Fetch(rj.clone()));

        // RJ answers first, then the slower SP response arrives
        assert!(state.apply_cities(&rj, vec![city("Niterói")]));
        assert!(!state.apply_cities(&sp, vec![city("Campinas")]));

        assert_eq!(state.cities, vec![city("Niterói")]);
    }

    #[test]
    fn test_map_click_replaces_pin() {
        let mut state = RegistrationState::default();
        state.click_map(GeoCoordinate::new(-23.5, -46.6));
        state.click_map(GeoCoordinate::new(-22.9, -43.2));
        assert_eq!(state.selected_position, GeoCoordinate::new(-22.9, -43.2));
        assert_eq!(state.marker_position(), GeoCoordinate::new(-22.9, -43.2));
    }

    #[test]
    fn test_marker_falls_back_to_device_position() {
        let mut state = RegistrationState::default();
        assert!(state.marker_position().is_zero());

        state.initial_position = GeoCoordinate::new(-19.9, -43.9);
        assert_eq!(state.marker_position(), GeoCoordinate::new(-19.9, -43.9));

        state.click_map(GeoCoordinate::new(-20.0, -44.0));
        assert_eq!(state.marker_position(), GeoCoordinate::new(-20.0, -44.0));
    }

    #[test]
    fn test_toggle_item_round_trip() {
        let mut state = filled_state();
        let before = state.selected_items.clone();
        state.toggle_item(3);
        assert!(!state.selected_items.contains(3));
        state.toggle_item(3);
        assert_eq!(state.selected_items, before);
    }

    #[test]
    fn test_submission_payload() {
        let mut state = filled_state();
        state.click_map(GeoCoordinate::new(-23.96, -46.33));

        let record = state.begin_submit().expect("idle form should submit");
        assert_eq!(record.name, "Acme");
        assert_eq!(record.email, "a@b.co");
        assert_eq!(record.whatsapp, "123");
        assert_eq!(record.item_ids, vec![1, 3]);
        assert_eq!(record.region_code, Some(region("SP")));
        assert_eq!(record.city_name, Some(city("Santos")));
        assert_eq!((record.latitude, record.longitude), (-23.96, -46.33));
        assert_eq!(state.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn test_empty_selection_posts_placeholders() {
        let mut state = RegistrationState::default();
        state.set_field(FormField::Name, "Acme".into());

        let record = state.begin_submit().unwrap();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"Acme","email":"","whatsapp":"","uf":"0","city":"0","lat":0.0,"long":0.0,"items":[]}"#
        );
    }

    #[test]
    fn test_payload_uses_fallback_coordinate() {
        let mut state = filled_state();
        state.initial_position = GeoCoordinate::new(-19.9, -43.9);
        let record = state.begin_submit().unwrap();
        assert_eq!((record.latitude, record.longitude), (-19.9, -43.9));
    }

    #[test]
    fn test_success_confirms_then_returns_home() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        state.submit_succeeded();
        assert!(state.is_submitted());

        // Delay elapsed
        assert!(state.finish_confirmation());
        assert!(!state.is_submitted());
        assert_eq!(state.status, SubmissionStatus::Idle);

        // A second firing does nothing
        assert!(!state.finish_confirmation());
    }

    #[test]
    fn test_failure_keeps_form_intact() {
        let mut state = filled_state();
        let before = state.clone();
        state.begin_submit().unwrap();

        state.submit_failed();

        assert!(!state.is_submitted());
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.fields, before.fields);
        assert_eq!(state.selected_items, before.selected_items);
        assert_eq!(state.selected_region, before.selected_region);
        assert_eq!(state.selected_city, before.selected_city);

        // Form is usable for a retry
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_no_duplicate_submit() {
        let mut state = filled_state();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());

        state.submit_succeeded();
        assert!(state.begin_submit().is_none());
    }
}

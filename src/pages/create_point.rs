//! Create Point Page
//!
//! Registration form: entity data, a pin on the map, region/city and
//! collected items, submitted to the backend as one record.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use pin_map::{LatLng, PinMap};
use reactive_stores::Store;

use crate::api::{self, AbortOnDrop, ApiError};
use crate::components::{ConfirmModal, ItemGrid, LocationSelect, PageHeader, TextField};
use crate::context::use_app_context;
use crate::geolocation;
use crate::models::{CityName, FormField, RegionCode};
use crate::routes;
use crate::store::{RegionChange, RegistrationState, RegistrationStateStoreFields, RegistrationStore, SubmissionStatus};

/// Unwrap a read, logging failures. Aborts only happen on teardown or
/// when a newer request replaced this one.
fn loaded<T>(what: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(ApiError::Aborted) => {
            log::debug!("[CreatePoint] {} request aborted", what);
            None
        }
        Err(e) => {
            log::warn!("[CreatePoint] Failed to load {}: {}", what, e);
            None
        }
    }
}

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let form: RegistrationStore = Store::new(RegistrationState::default());
    let navigate = use_navigate();

    // Dropped with the page: pending reads abort, the confirmation timer is cancelled
    let page_requests = StoredValue::new_local(AbortOnDrop::new());
    let city_request = StoredValue::new_local(None::<AbortOnDrop>);
    let confirm_timer = StoredValue::new_local(None::<Timeout>);

    // Device position, item catalog and region list, in no particular order
    Effect::new(move |_| {
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(position) => {
                    log::debug!("[CreatePoint] Device position {:?}", position);
                    form.try_update(|f| f.initial_position = position);
                }
                Err(e) => log::debug!("[CreatePoint] No device position: {}", e),
            }
        });

        let signal = page_requests.with_value(AbortOnDrop::signal);
        spawn_local(async move {
            let config = ctx.config();
            if let Some(items) = loaded("items", api::list_items(&config, signal.as_ref()).await) {
                log::info!("[CreatePoint] Loaded {} items", items.len());
                form.try_update(|f| f.items = items);
            }
        });

        let signal = page_requests.with_value(AbortOnDrop::signal);
        spawn_local(async move {
            let config = ctx.config();
            if let Some(regions) = loaded("regions", api::list_regions(&config, signal.as_ref()).await) {
                log::info!("[CreatePoint] Loaded {} regions", regions.len());
                form.try_update(|f| f.regions = regions);
            }
        });
    });

    let on_region = Callback::new(move |region: Option<RegionCode>| {
        match form.try_update(|f| f.select_region(region)) {
            Some(RegionChange::Fetch(query)) => {
                // Replacing the handle aborts the request for the previous region
                let request = AbortOnDrop::new();
                let signal = request.signal();
                city_request.set_value(Some(request));

                spawn_local(async move {
                    let config = ctx.config();
                    let result = api::list_cities(&config, &query.region, signal.as_ref()).await;
                    if let Some(cities) = loaded("cities", result) {
                        if form.try_update(|f| f.apply_cities(&query, cities)) == Some(false) {
                            log::debug!("[CreatePoint] Dropped stale cities for {}", query.region);
                        }
                    }
                });
            }
            Some(RegionChange::Cleared) => city_request.set_value(None),
            Some(RegionChange::Unchanged) | None => {}
        }
    });

    let on_city = Callback::new(move |city: Option<CityName>| {
        form.update(|f| f.select_city(city));
    });

    let on_map_click = Callback::new(move |position: LatLng| {
        form.update(|f| f.click_map(position.into()));
    });

    let on_input = Callback::new(move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match input.name().parse::<FormField>() {
            Ok(field) => form.update(|f| f.set_field(field, input.value())),
            Err(e) => log::warn!("[CreatePoint] {}", e),
        }
    });

    let on_toggle_item = Callback::new(move |id: u32| {
        form.update(|f| f.toggle_item(id));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.try_update(|f| f.begin_submit()).flatten() else {
            log::debug!("[CreatePoint] Submit ignored while another is pending");
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let config = ctx.config();
            match api::create_point(&config, &record).await {
                Ok(()) => {
                    log::info!("[CreatePoint] Registered point {:?} with {} items", record.name, record.item_ids.len());
                    if form.try_update(|f| f.submit_succeeded()).is_none() {
                        return;
                    }
                    let delay = config.confirmation_delay.as_millis() as u32;
                    let timer = Timeout::new(delay, move || {
                        if form.try_update(|f| f.finish_confirmation()) == Some(true) {
                            // Navigate outside the timer callback; unmounting drops this timer
                            spawn_local(async move { navigate(routes::HOME, Default::default()) });
                        }
                    });
                    confirm_timer.set_value(Some(timer));
                }
                Err(e) => {
                    log::error!("[CreatePoint] Failed to register point: {}", e);
                    form.try_update(|f| f.submit_failed());
                }
            }
        });
    };

    let field_value = move |field: FormField| {
        Signal::derive(move || form.fields().with(|f| f.get(field).to_string()))
    };
    let map_center = Signal::derive(move || LatLng::from(form.initial_position().get()));
    let map_marker = Signal::derive(move || LatLng::from(form.with(|f| f.marker_position())));

    view! {
        <div id="page-create-point">
            <PageHeader back_link=true />

            <form on:submit=on_submit>
                <h1>"Cadastro do" <br /> "ponto de coleta"</h1>

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <TextField
                        field=FormField::Name
                        label="Nome da entidade"
                        value=field_value(FormField::Name)
                        on_input=on_input
                    />

                    <div class="field-group">
                        <TextField
                            field=FormField::Email
                            label="E-mail"
                            value=field_value(FormField::Email)
                            on_input=on_input
                        />
                        <TextField
                            field=FormField::Whatsapp
                            label="Whatsapp"
                            value=field_value(FormField::Whatsapp)
                            on_input=on_input
                        />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <PinMap
                        center=map_center
                        marker=map_marker
                        on_click=on_map_click
                        tiles=config.tiles.clone()
                        zoom=config.map_zoom
                        class="pin-map"
                    />

                    <LocationSelect
                        regions=Signal::derive(move || form.regions().get())
                        cities=Signal::derive(move || form.cities().get())
                        selected_region=Signal::derive(move || form.selected_region().get())
                        selected_city=Signal::derive(move || form.selected_city().get())
                        on_region=on_region
                        on_city=on_city
                    />
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de coleta"</h2>
                        <span>"Selecione um ou mais itens abaixo"</span>
                    </legend>

                    <ItemGrid
                        items=Signal::derive(move || form.items().get())
                        selected=Signal::derive(move || form.selected_items().get())
                        on_toggle=on_toggle_item
                    />
                </fieldset>

                <button type="submit" disabled=move || form.status().get() != SubmissionStatus::Idle>
                    <span class="submit-icon">"✓"</span>
                    "Cadastrar ponto de coleta"
                </button>
            </form>

            <ConfirmModal visible=Signal::derive(move || form.with(|f| f.is_submitted())) />
        </div>
    }
}

//! Leptos Pin Map
//!
//! Thin Leaflet bindings plus a map component that shows one marker
//! and reports clicks. Expects the Leaflet script to be loaded
//! (global `L`) before the component mounts.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type TileLayer;
    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;
}

/// A latitude/longitude pair in Leaflet's object shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn to_js(self) -> JsValue {
        serde_wasm_bindgen::to_value(&self).unwrap_or(JsValue::NULL)
    }
}

/// Tile layer source
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    /// URL template, e.g. `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`
    pub url_template: String,
    pub attribution: String,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Leaflet event payloads carry the clicked position under `latlng`
#[derive(Deserialize)]
struct ClickEvent {
    latlng: LatLng,
}

fn decode_click(event: JsValue) -> Result<LatLng, serde_wasm_bindgen::Error> {
    let event: ClickEvent = serde_wasm_bindgen::from_value(event)?;
    Ok(event.latlng)
}

/// Live Leaflet objects; removing the map on drop detaches its listeners
struct MapHandle {
    map: LeafletMap,
    marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}

/// Map with a single marker
///
/// `center` recenters the view, `marker` moves the pin, and every click
/// on the map is reported through `on_click`.
#[component]
pub fn PinMap(
    #[prop(into)] center: Signal<LatLng>,
    #[prop(into)] marker: Signal<LatLng>,
    #[prop(into)] on_click: Callback<LatLng>,
    tiles: TileSource,
    #[prop(default = 15.0)] zoom: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);

    // Build the map once the container is in the DOM
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let map = leaflet_map(&element);
        map.set_view(&center.get_untracked().to_js(), zoom);

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution: &tiles.attribution })
            .unwrap_or(JsValue::UNDEFINED);
        tile_layer(&tiles.url_template, &options).add_tiles_to(&map);

        let pin = leaflet_marker(&marker.get_untracked().to_js());
        pin.add_marker_to(&map);

        let on_click_closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match decode_click(event) {
                Ok(position) => on_click.run(position),
                Err(e) => log::warn!("[PinMap] Unreadable click event: {}", e),
            }
        });
        map.on("click", on_click_closure.as_ref().unchecked_ref());

        handle.set_value(Some(MapHandle { map, marker: pin, _on_click: on_click_closure }));
    });

    Effect::new(move |_| {
        let position = center.get();
        handle.with_value(|h| {
            if let Some(h) = h {
                h.map.set_view(&position.to_js(), zoom);
            }
        });
    });

    Effect::new(move |_| {
        let position = marker.get();
        handle.with_value(|h| {
            if let Some(h) = h {
                h.marker.set_lat_lng(&position.to_js());
            }
        });
    });

    view! { <div node_ref=container class=class></div> }
}

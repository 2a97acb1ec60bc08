//! Location Select Component
//!
//! Region (UF) and city dropdowns. Both start on a placeholder option
//! whose value is `0`.

use leptos::prelude::*;

use crate::models::{CityName, RegionCode, UNSELECTED as PLACEHOLDER};

/// Placeholder and empty values mean "nothing selected"
fn parse_choice(value: String) -> Option<String> {
    if value.is_empty() || value == PLACEHOLDER {
        None
    } else {
        Some(value)
    }
}

/// One selectable option; the value doubles as the label
fn choice_option(value: String, is_selected: impl Fn() -> bool + Send + Sync + 'static) -> impl IntoView {
    let label = value.clone();
    view! { <option value=value selected=is_selected>{label}</option> }
}

/// Region and city selects
#[component]
pub fn LocationSelect(
    #[prop(into)] regions: Signal<Vec<RegionCode>>,
    #[prop(into)] cities: Signal<Vec<CityName>>,
    #[prop(into)] selected_region: Signal<Option<RegionCode>>,
    #[prop(into)] selected_city: Signal<Option<CityName>>,
    #[prop(into)] on_region: Callback<Option<RegionCode>>,
    #[prop(into)] on_city: Callback<Option<CityName>>,
) -> impl IntoView {
    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    on:change=move |ev| on_region.run(parse_choice(event_target_value(&ev)).map(RegionCode))
                >
                    <option value=PLACEHOLDER selected=move || selected_region.get().is_none()>
                        "Selecione uma UF"
                    </option>
                    <For
                        each=move || regions.get()
                        key=|region| region.clone()
                        children=move |region| {
                            let code = region.0.clone();
                            choice_option(code, move || selected_region.get().as_ref() == Some(&region))
                        }
                    />
                </select>
            </div>

            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    name="city"
                    id="city"
                    on:change=move |ev| on_city.run(parse_choice(event_target_value(&ev)).map(CityName))
                >
                    <option value=PLACEHOLDER selected=move || selected_city.get().is_none()>
                        "Selecione uma cidade"
                    </option>
                    <For
                        each=move || cities.get()
                        key=|city| city.clone()
                        children=move |city| {
                            let name = city.0.clone();
                            choice_option(name, move || selected_city.get().as_ref() == Some(&city))
                        }
                    />
                </select>
            </div>
        </div>
    }
}

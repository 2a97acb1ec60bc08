//! Text Field Component

use leptos::prelude::*;

use crate::models::FormField;

/// Labelled text input whose `name` attribute identifies the form field
#[component]
pub fn TextField(
    field: FormField,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<web_sys::Event>,
) -> impl IntoView {
    let name = field.input_name();
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                type="text"
                name=name
                id=name
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(ev)
            />
        </div>
    }
}

//! Item Grid Component
//!
//! Clickable grid of collectable item categories.

use leptos::prelude::*;

use crate::models::{Item, SelectedItemSet};

/// Item cards; clicking one reports its id, selected cards get the
/// `selected` class
#[component]
pub fn ItemGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selected: Signal<SelectedItemSet>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="items-grid">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let is_selected = move || selected.with(|s| s.contains(id));
                    view! {
                        <li
                            class=move || if is_selected() { "selected" } else { "" }
                            on:click=move |_| on_toggle.run(id)
                        >
                            <img src=item.image_url alt=item.title.clone() />
                            <span>{item.title}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

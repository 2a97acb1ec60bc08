//! Page Header Component
//!
//! Logo bar shared by both pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

/// Logo header, optionally with a link back to the landing page
#[component]
pub fn PageHeader(#[prop(optional)] back_link: bool) -> impl IntoView {
    view! {
        <header>
            <img src="public/logo.svg" alt="ColetaWeb" />
            <Show when=move || back_link>
                <A href=routes::HOME>
                    <span class="back-arrow">"←"</span>
                    " Voltar para home"
                </A>
            </Show>
        </header>
    }
}

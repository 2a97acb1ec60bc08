//! Confirmation Modal Component

use leptos::prelude::*;

/// Full-screen success overlay with a check animation
#[component]
pub fn ConfirmModal(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="confirm-modal">
                <div class="animation">
                    <div class="check-mark" aria-hidden="true"></div>
                    <h1>"Ponto de coleta" <br /> "cadastrado com sucesso!"</h1>
                </div>
            </div>
        </Show>
    }
}

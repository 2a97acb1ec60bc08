//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::PageHeader;
use crate::routes;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <PageHeader />
                <main>
                    <h1>"Descarte seus resíduos de forma segura"</h1>
                    <p>"Ajude o meio ambiente encontrando facilmente o ponto de coleta mais próximo."</p>
                    <A href=routes::CREATE_POINT>
                        <span class="login-icon">"→"</span>
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}

//! Coleta Web App
//!
//! Router with the landing page and the create-point form.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{CreatePoint, Home};
use crate::routes;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::debug!("[APP] Backend {}, directory {}", config.api_url, config.directory_url);

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div id="page-not-found">
            <h1>"Página não encontrada"</h1>
            <A href=routes::HOME>"Voltar para home"</A>
        </div>
    }
}

pub mod components;
pub mod pages;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ClientConfig;
use crate::services::{AuthContext, LocalStore, provide_auth_context};
use components::Nav;
use pages::{HomePage, LoginPage, NotFound};

fn load_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default server URL");
        ClientConfig::default()
    })
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(load_config());
    provide_auth_context(AuthContext::new(Arc::new(LocalStore)));

    view! {
        <Title text="NbuyIt!"/>
        <Meta name="description" content="NbuyIt! online store"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}

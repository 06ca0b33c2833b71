//! Root application component with routing and the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is created once here and provided as context. Store
//! navigations are queued on a signal; `NavigationBridge` (inside the router)
//! drains it into `use_navigate`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::route_view::RouteView;
use crate::config::AppConfig;
use crate::net::api::AuthClient;
use crate::session::{Navigator, SessionStore};
use crate::storage::LocalStore;

/// Navigator that queues the path for `NavigationBridge`.
#[derive(Clone, Copy, Debug)]
pub struct SignalNavigator(RwSignal<Option<String>>);

impl SignalNavigator {
    #[must_use]
    pub fn new(pending: RwSignal<Option<String>>) -> Self {
        Self(pending)
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, path: &str) {
        self.0.set(Some(path.to_owned()));
    }
}

pub type AppSession = SessionStore<AuthClient, LocalStore, SignalNavigator>;

/// Session context shared by the router and pages.
pub type SharedSession = Arc<AppSession>;

fn load_config() -> AppConfig {
    AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    })
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::info!("lockbox starting: api_url={} backend={:?}", config.api_url, config.backend);

    let pending = RwSignal::new(None::<String>);
    let store: SharedSession =
        Arc::new(SessionStore::new(AuthClient::from_config(&config), LocalStore, SignalNavigator::new(pending)));
    provide_context(store);

    view! {
        <Title text="Lockbox"/>

        <Router>
            <NavigationBridge pending/>
            <main class="app">
                <Routes fallback=|| view! { <RouteView/> }>
                    <Route path=StaticSegment("") view=RouteView/>
                    <Route path=WildcardSegment("any") view=RouteView/>
                </Routes>
            </main>
        </Router>
    }
}

/// Applies navigations queued by the session store.
#[component]
fn NavigationBridge(pending: RwSignal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

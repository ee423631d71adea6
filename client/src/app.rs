//! Root application component: picks the page for the loaded path and
//! provides the gate's shared context.
//!
//! Every navigation is a full `location.replace`, so the page is chosen once
//! per load from `location.pathname` and no client-side router is needed.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use authgate::{PageKind, Session};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::util::navigate;
use crate::util::storage::LocalStorage;

fn page_title(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Login => "Sign in",
        PageKind::Root => "Home",
        PageKind::Other => "Page not found",
    }
}

/// Root application component.
///
/// Provides `GateConfig` and `Session<LocalStorage>` to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::config::load();
    let kind = PageKind::classify(&navigate::current_path(), &config);
    log::debug!("app: loaded {kind:?} page");

    provide_context(Session::new(LocalStorage, &config));
    provide_context(config);

    let page = match kind {
        PageKind::Login => view! { <LoginPage/> }.into_any(),
        PageKind::Root => view! { <HomePage/> }.into_any(),
        PageKind::Other => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    };

    view! {
        <Title text=page_title(kind)/>
        {page}
    }
}

//! Logout control. May be placed on any page.

use authgate::{GateConfig, Session, logout};
use leptos::prelude::*;

use crate::util::navigate;
use crate::util::storage::LocalStorage;

/// Clears the session and replaces the current page with the login page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<Session<LocalStorage>>();

    let on_click = move |_| navigate::follow(logout(&session, &config));

    view! {
        <button id="logoutBtn" class="logout-button" type="button" on:click=on_click>
            "Log out"
        </button>
    }
}

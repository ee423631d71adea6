//! Protected root page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session check runs once at mount. Without a token the page is replaced
//! by the login page; clearing the session later (logout) navigates away on
//! its own.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use authgate::{GateConfig, Session, check_page_load};
use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::util::navigate;
use crate::util::storage::LocalStorage;

fn greeting(username: Option<&str>) -> String {
    match username.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Signed in as {name}"),
        None => "Signed in".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<Session<LocalStorage>>();

    if let Some(redirect) = check_page_load(&navigate::current_path(), &session, &config) {
        navigate::follow(redirect);
        return ().into_any();
    }

    let username = match session.username() {
        Ok(name) => name,
        Err(e) => {
            log::warn!("home: username read failed: {e}");
            None
        }
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <span class="home-header__user">{greeting(username.as_deref())}</span>
                <LogoutButton/>
            </header>
        </div>
    }
    .into_any()
}

//! History-replacing navigation.
//!
//! Every redirect the gate issues goes through [`follow`], which uses
//! `location.replace` so the page being left never stays in history.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use authgate::Redirect;

/// Path of the page currently loaded; `/` outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Carry out `redirect`, waiting out its delay first.
pub fn follow(redirect: Redirect) {
    if redirect.delay.is_zero() {
        replace(&redirect.to);
        return;
    }
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(redirect.delay).await;
        replace(&redirect.to);
    });
    #[cfg(not(feature = "csr"))]
    replace(&redirect.to);
}

fn replace(path: &str) {
    log::debug!("navigate: replace -> {path}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(path) {
                log::warn!("navigate: replace to {path} failed: {e:?}");
            }
        }
    }
}

//! Login page: username + password form posting to the login endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visiting with a session already present replaces the page with the root
//! page before the form is rendered; `authgate::open_login_page` makes that
//! decision and only hands out a `LoginForm` to signed-out visitors. Each
//! submit runs through the form and renders its feedback; overlapping submits
//! are dropped.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use authgate::{Credentials, GateConfig, LoginEntry, Notice, Session, open_login_page};
use leptos::prelude::*;

use crate::components::message_box::MessageBox;
use crate::net::api::FetchTransport;
use crate::util::navigate;
use crate::util::storage::LocalStorage;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<Session<LocalStorage>>();

    let form = match open_login_page(&navigate::current_path(), FetchTransport, session, config) {
        LoginEntry::Redirect(redirect) => {
            navigate::follow(redirect);
            return ().into_any();
        }
        LoginEntry::Form(form) => form,
    };

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.begin() else {
            log::debug!("login: submit ignored, request already in flight");
            return;
        };
        let credentials =
            Credentials::from_form(&username.get_untracked(), &password.get_untracked());
        notice.set(None);
        busy.set(true);

        let form = form.clone();
        leptos::task::spawn_local(async move {
            let feedback = form.submit(attempt, &credentials).await;
            busy.set(false);
            notice.set(Some(feedback.notice));
            if let Some(redirect) = feedback.redirect {
                navigate::follow(redirect);
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form id="loginForm" class="login-form" on:submit=on_submit>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <MessageBox notice=notice/>
            </div>
        </div>
    }
    .into_any()
}

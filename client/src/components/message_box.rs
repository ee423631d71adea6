//! Login message region: hidden, error-styled, or success-styled.

#[cfg(test)]
#[path = "message_box_test.rs"]
mod message_box_test;

use authgate::Notice;
use leptos::prelude::*;

fn region_class(notice: Option<&Notice>) -> &'static str {
    notice.map_or("msg", Notice::css_class)
}

fn region_display(notice: Option<&Notice>) -> &'static str {
    if notice.is_some() { "block" } else { "none" }
}

#[component]
pub fn MessageBox(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <div
            id="msg"
            class=move || notice.with(|n| region_class(n.as_ref()))
            style:display=move || notice.with(|n| region_display(n.as_ref()))
            role="status"
        >
            {move || notice.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}

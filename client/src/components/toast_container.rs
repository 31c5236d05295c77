//! Fixed overlay listing the active toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`, outside the router, so toasts raised by a page
//! survive the navigation that page triggers.

#[cfg(test)]
#[path = "toast_container_test.rs"]
mod toast_container_test;

use leptos::prelude::*;

use crate::state::toast::Toast;
use crate::util::toast::ToastContext;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();

    view! {
        <div class="toast-container" aria-live="polite">
            {move || toasts.toasts().into_iter().map(|toast| view! { <ToastItem toast=toast /> }).collect_view()}
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<ToastContext>();
    let class = toast_class(&toast);
    let id = toast.id;

    view! {
        <div class=class role="alert">
            <div class="toast__body">
                <strong class="toast__title">{toast.title}</strong>
                {toast.detail.map(|detail| view! { <p class="toast__detail">{detail}</p> })}
            </div>
            <button type="button" class="toast__close" aria-label="Fechar" on:click=move |_| toasts.remove(&id)>
                "×"
            </button>
        </div>
    }
}

pub fn toast_class(toast: &Toast) -> String {
    let mut class = format!("toast toast--{}", toast.kind.css_modifier());
    if toast.detail.is_none() {
        class.push_str(" toast--compact");
    }
    class
}

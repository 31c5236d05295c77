//! Labelled form input with inline validation feedback.
//!
//! The field's error is looked up by `name` in the page's error map, so the
//! same key the validator reports (`password_confirmation`, ...) is the key
//! the input is registered under.

#[cfg(test)]
#[path = "text_input_test.rs"]
mod text_input_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Single-line input bound to `value`, highlighted when `errors` has an
/// entry for `name`.
#[component]
pub fn TextInput(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<BTreeMap<String, String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let error = move || errors.with(|e| e.get(name).cloned());
    let class = move || input_class(focused.get(), !value.with(String::is_empty), error().is_some());

    view! {
        <div class=class>
            {icon.map(|glyph| view! { <span class="input__icon" aria-hidden="true">{glyph}</span> })}
            <input
                class="input__field"
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
            {move || error().map(|message| view! { <span class="input__error" role="alert">{message}</span> })}
        </div>
    }
}

/// BEM class list for the wrapper. Errors win over focus so a focused
/// invalid field stays red.
pub fn input_class(focused: bool, filled: bool, errored: bool) -> String {
    let mut class = String::from("input");
    if errored {
        class.push_str(" input--errored");
    } else if focused {
        class.push_str(" input--focused");
    }
    if filled {
        class.push_str(" input--filled");
    }
    class
}

//! Sign-in page at the public landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success this page does not navigate: the session change re-runs the
//! route guard, which sends the user to the `from` return path or the
//! dashboard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppApi;
use crate::components::text_input::TextInput;
use crate::net::types::SignInCredentials;
use crate::util::auth::AuthContext;
use crate::util::lifetime::ViewLifetime;
use crate::util::toast::ToastContext;
use crate::util::validation::{FormRecord, SignInForm, field_errors};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<ToastContext>();
    let api = expect_context::<AppApi>();
    let lifetime = ViewLifetime::for_current_view();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(failure) = form.validate() {
            errors.set(field_errors(&failure));
            return;
        }
        errors.set(BTreeMap::new());
        busy.set(true);

        let api = api.clone();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = auth.sign_in(&api, &SignInCredentials::from(form)).await {
                log::warn!("sign in failed: {e}");
                toasts.error("Falha na autenticação!", Some("Verifique os dados preenchidos."));
            }
            if lifetime.is_alive() {
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"GoBarber"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Faça seu logon"</h2>
                    <TextInput name="email" placeholder="E-mail" icon="✉" value=email errors=errors />
                    <TextInput
                        name="password"
                        placeholder="Senha"
                        icon="🔒"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                    <A href="/forgot-password">"Esqueci minha senha"</A>
                </form>
                <A href="/signup" attr:class="auth-card__switch">"Criar conta"</A>
            </div>
        </div>
    }
}

impl From<SignInForm> for SignInCredentials {
    fn from(form: SignInForm) -> Self {
        Self { email: form.email.trim().to_owned(), password: form.password }
    }
}

//! Account registration page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::components::text_input::TextInput;
use crate::net::types::SignUpRequest;
use crate::util::lifetime::ViewLifetime;
use crate::util::toast::ToastContext;
use crate::util::validation::{FormRecord, SignUpForm, field_errors};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();
    let api = expect_context::<AppApi>();
    let navigate = use_navigate();
    let landing = super::landing_routes().public_landing;
    let lifetime = ViewLifetime::for_current_view();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignUpForm { name: name.get_untracked(), email: email.get_untracked(), password: password.get_untracked() };
        if let Err(failure) = form.validate() {
            errors.set(field_errors(&failure));
            return;
        }
        errors.set(BTreeMap::new());
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        let landing = landing.clone();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match api.create_user(&sign_up_request(form)).await {
                Ok(identity) => {
                    log::debug!("registered user {}", identity.id);
                    toasts.success("Cadastro realizado!", Some("Você já pode fazer seu logon no GoBarber!"));
                    if lifetime.is_alive() {
                        navigate(&landing, Default::default());
                    }
                }
                Err(e) => {
                    log::warn!("sign up failed: {e}");
                    toasts.error("Erro no cadastro", Some("Ocorreu um erro ao fazer cadastro, tente novamente."));
                }
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
                    <h2>"Faça seu cadastro"</h2>
                    <TextInput name="name" placeholder="Nome" icon="👤" value=name errors=errors />
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
                        "Cadastrar"
                    </button>
                </form>
                <A href="/" attr:class="auth-card__switch">"Voltar para logon"</A>
            </div>
        </div>
    }
}

pub fn sign_up_request(form: SignUpForm) -> SignUpRequest {
    SignUpRequest { name: form.name.trim().to_owned(), email: form.email.trim().to_owned(), password: form.password }
}

//! Password recovery request page.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppApi;
use crate::components::text_input::TextInput;
use crate::util::lifetime::ViewLifetime;
use crate::util::toast::ToastContext;
use crate::util::validation::{ForgotPasswordForm, FormRecord, field_errors};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();
    let api = expect_context::<AppApi>();
    let lifetime = ViewLifetime::for_current_view();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = ForgotPasswordForm { email: email.get_untracked() };
        if let Err(failure) = form.validate() {
            errors.set(field_errors(&failure));
            return;
        }
        errors.set(BTreeMap::new());
        loading.set(true);

        let api = api.clone();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match api.forgot_password(form.email.trim()).await {
                Ok(()) => toasts.success(
                    "E-mail de recuperação enviado!",
                    Some("Enviamos um e-mail para a recuperação de senha, verifique sua caixa de entrada."),
                ),
                Err(e) => {
                    log::warn!("password recovery failed: {e}");
                    toasts.error(
                        "Falha na recuperação de senha!",
                        Some("Ocorreu um erro ao tentar realizar a recuperação de senha, tente novamente."),
                    )
                }
            };
            if lifetime.is_alive() {
                loading.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"GoBarber"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Recuperar senha"</h2>
                    <TextInput name="email" placeholder="E-mail" icon="✉" value=email errors=errors />
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Carregando..." } else { "Recuperar" }}
                    </button>
                </form>
                <A href="/" attr:class="auth-card__switch">"Voltar ao logon"</A>
            </div>
        </div>
    }
}

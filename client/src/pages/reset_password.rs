//! Password reset page reached from the recovery e-mail link.
//!
//! The recovery token arrives as the `token` query parameter. A link without
//! one cannot succeed, so it is reported exactly like a rejected reset.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppApi;
use crate::components::text_input::TextInput;
use crate::net::types::ResetPasswordRequest;
use crate::util::lifetime::ViewLifetime;
use crate::util::toast::ToastContext;
use crate::util::validation::{FormRecord, ResetPasswordForm, field_errors};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();
    let api = expect_context::<AppApi>();
    let query = use_query_map();
    let navigate = use_navigate();
    let landing = super::landing_routes().public_landing;
    let lifetime = ViewLifetime::for_current_view();

    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        if let Err(failure) = form.validate() {
            errors.set(field_errors(&failure));
            return;
        }
        errors.set(BTreeMap::new());

        let token = query.with_untracked(|q| q.get("token"));
        let Some(request) = reset_request(token, form) else {
            log::warn!("password reset link has no token");
            report_failure(toasts);
            return;
        };
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        let landing = landing.clone();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match api.reset_password(&request).await {
                Ok(()) => {
                    if lifetime.is_alive() {
                        navigate(&landing, Default::default());
                    }
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    report_failure(toasts);
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
                    <h2>"Redefinir senha"</h2>
                    <TextInput
                        name="password"
                        placeholder="Nova senha"
                        icon="🔒"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <TextInput
                        name="password_confirmation"
                        placeholder="Confirmação da senha"
                        icon="🔒"
                        input_type="password"
                        value=password_confirmation
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Alterar senha"
                    </button>
                </form>
            </div>
        </div>
    }
}

fn report_failure(toasts: ToastContext) {
    toasts.error(
        "Falha na redefinição da senha!",
        Some("Ocorreu uma falha ao redefinir a sua senha, tente novamente."),
    );
}

/// Pair the validated form with the link's token; `None` when the token is
/// missing or blank.
pub fn reset_request(token: Option<String>, form: ResetPasswordForm) -> Option<ResetPasswordRequest> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    Some(ResetPasswordRequest { token, password: form.password, password_confirmation: form.password_confirmation })
}

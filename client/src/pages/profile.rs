//! Profile editing page with avatar upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the form submit and the avatar picker end in
//! `AuthContext::update_identity`, so the header greeting and the persisted
//! identity follow the server's answer. Password fields are only sent when
//! the user typed the current password.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::components::text_input::TextInput;
use crate::net::types::{Identity, PasswordChange, ProfileUpdate};
use crate::state::session::SessionError;
use crate::util::auth::AuthContext;
use crate::util::lifetime::ViewLifetime;
use crate::util::toast::ToastContext;
use crate::util::validation::{FormRecord, ProfileForm, field_errors};

/// Multipart field name the API expects the avatar under.
pub const AVATAR_FIELD: &str = "avatar";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<ToastContext>();
    let api = expect_context::<AppApi>();
    let navigate = use_navigate();
    let landing = super::landing_routes().authenticated_landing;
    let lifetime = ViewLifetime::for_current_view();

    let current = untrack(move || auth.identity());
    let name = RwSignal::new(current.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|i| i.email.clone()).unwrap_or_default());
    let old_password = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::new());
    let busy = RwSignal::new(false);

    let submit_api = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            old_password: old_password.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        if let Err(failure) = form.validate() {
            errors.set(field_errors(&failure));
            return;
        }
        errors.set(BTreeMap::new());
        busy.set(true);

        let update = profile_update(&form);
        let api = submit_api.clone();
        let navigate = navigate.clone();
        let landing = landing.clone();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match save_profile(&api, auth, &update).await {
                Ok(()) => {
                    toasts.success(
                        "Perfil atualizado com sucesso!",
                        Some("As informações do seu perfil foram atualizadas com sucesso."),
                    );
                    if lifetime.is_alive() {
                        navigate(&landing, Default::default());
                    }
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    toasts.error(
                        "Falha na atualização do perfil!",
                        Some("Verifique os dados preenchidos e tente novamente."),
                    );
                }
            }
            if lifetime.is_alive() {
                busy.set(false);
            }
        });
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match upload_avatar(&api, auth, file).await {
                    Ok(()) => toasts.success("Avatar atualizado com sucesso!", None),
                    Err(e) => {
                        log::warn!("avatar upload failed: {e}");
                        toasts.error("Falha na atualização do avatar!", Some("Tente novamente com outra imagem."))
                    }
                };
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &api);
        }
    };

    let avatar = move || auth.identity().and_then(|i| i.avatar_url);
    let placeholder = move || auth.identity().map(|i| initials(&i)).unwrap_or_default();

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <A href="/dashboard" attr:class="profile-page__back">"← Voltar"</A>
            </header>
            <form class="auth-form profile-form" on:submit=on_submit>
                <label class="avatar-picker">
                    {move || match avatar() {
                        Some(url) => view! { <img class="avatar-picker__image" src=url alt="Avatar" /> }.into_any(),
                        None => view! { <span class="avatar-picker__initials">{placeholder()}</span> }.into_any(),
                    }}
                    <span class="avatar-picker__button" title="Alterar avatar">"📷"</span>
                    <input class="avatar-picker__input" type="file" accept="image/*" on:change=on_avatar />
                </label>

                <h2>"Meu perfil"</h2>
                <TextInput name="name" placeholder="Nome" icon="👤" value=name errors=errors />
                <TextInput name="email" placeholder="E-mail" icon="✉" value=email errors=errors />

                <div class="profile-form__passwords">
                    <TextInput
                        name="old_password"
                        placeholder="Senha atual"
                        icon="🔒"
                        input_type="password"
                        value=old_password
                        errors=errors
                    />
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
                        placeholder="Confirmar senha"
                        icon="🔒"
                        input_type="password"
                        value=password_confirmation
                        errors=errors
                    />
                </div>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Confirmar mudanças"
                </button>
            </form>
        </div>
    }
}

/// Wire body for a profile submission. The password block is omitted unless
/// the current password was supplied.
pub fn profile_update(form: &ProfileForm) -> ProfileUpdate {
    let password_change = form.changes_password().then(|| PasswordChange {
        old_password: form.old_password.clone(),
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
    });
    ProfileUpdate { name: form.name.trim().to_owned(), email: form.email.trim().to_owned(), password_change }
}

/// Up to two uppercase initials for the avatar placeholder.
pub fn initials(identity: &Identity) -> String {
    identity
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

async fn save_profile(api: &AppApi, auth: AuthContext, update: &ProfileUpdate) -> Result<(), SessionError> {
    let identity = api.update_profile(update, &auth).await?;
    auth.update_identity(identity)
}

#[cfg(feature = "hydrate")]
async fn upload_avatar(api: &AppApi, auth: AuthContext, file: web_sys::File) -> Result<(), SessionError> {
    let upload = read_upload(file).await?;
    let identity = api.update_avatar(upload, &auth).await?;
    auth.update_identity(identity)
}

#[cfg(feature = "hydrate")]
async fn read_upload(file: web_sys::File) -> Result<crate::net::types::Upload, crate::net::api::ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| crate::net::api::ApiError::Encode(format!("{e:?}")))?;
    Ok(crate::net::types::Upload {
        field: AVATAR_FIELD.to_owned(),
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

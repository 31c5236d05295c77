//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Signing out here needs no
//! navigation of its own: the cleared session re-runs the route guard, which
//! sends the user back to the public landing.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Identity;
use crate::pages::profile::initials;
use crate::util::auth::AuthContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let identity = move || auth.identity();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__brand">"GoBarber"</span>
                <div class="dashboard-page__profile">
                    {move || match identity().and_then(|i| i.avatar_url) {
                        Some(url) => view! { <img class="dashboard-page__avatar" src=url alt="Avatar" /> }.into_any(),
                        None => {
                            let text = identity().map(|i| initials(&i)).unwrap_or_default();
                            view! { <span class="dashboard-page__avatar dashboard-page__avatar--initials">{text}</span> }
                                .into_any()
                        }
                    }}
                    <div class="dashboard-page__greeting">
                        <span>"Bem-vindo,"</span>
                        <A href="/profile">
                            <strong>{move || display_name(identity().as_ref())}</strong>
                        </A>
                    </div>
                </div>
                <button
                    class="btn dashboard-page__sign-out"
                    type="button"
                    title="Sair"
                    on:click=move |_| auth.sign_out()
                >
                    "Sair"
                </button>
            </header>
            <main class="dashboard-page__content">
                <h1>"Horários agendados"</h1>
                <p class="dashboard-page__empty">"Nenhum agendamento neste dia."</p>
            </main>
        </div>
    }
}

/// Name shown in the greeting; falls back to the e-mail when the name is blank.
pub fn display_name(identity: Option<&Identity>) -> String {
    match identity {
        Some(i) if !i.name.trim().is_empty() => i.name.trim().to_owned(),
        Some(i) => i.email.clone(),
        None => String::new(),
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::toast_container::ToastContainer;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::GlooTransport;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, profile::ProfilePage,
    reset_password::ResetPasswordPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::util::auth::AuthContext;
use crate::util::toast::ToastContext;

/// API client type provided via context to every page.
pub type AppApi = ApiClient<GlooTransport>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration, the API client, the session, and the toast queue,
/// then sets up guarded client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = AuthContext::new(config.storage_keys());
    let toasts = ToastContext::new(config.toast_ttl);
    let api: AppApi = ApiClient::new(config.api_base_url.clone(), GlooTransport);

    provide_context(config);
    provide_context(auth);
    provide_context(toasts);
    provide_context(api);

    // Effects only run in the browser, so the server renders the
    // pre-restore state and hydration picks up from there.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/gobarber-web.css"/>
        <Title text="GoBarber"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Guarded><SignInPage/></Guarded> }/>
                <Route path=StaticSegment("signup") view=|| view! { <Guarded><SignUpPage/></Guarded> }/>
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <Guarded><ForgotPasswordPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <Guarded><ResetPasswordPage/></Guarded> }
                />
                <Route path=StaticSegment("dashboard") view=|| view! { <Guarded private=true><DashboardPage/></Guarded> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Guarded private=true><ProfilePage/></Guarded> }/>
            </Routes>
            <ToastContainer/>
        </Router>
    }
}

//! Route wrapper that renders its page or redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `App` is wrapped in `Guarded`. The decision is recomputed
//! whenever the location or the session changes; nothing renders until the
//! persisted session has been restored so SSR output never flashes a page the
//! user may not see.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::util::auth::AuthContext;
use crate::util::route_guard::{GuardOutcome, evaluate};

/// Render `children` when the guard allows it; otherwise navigate away.
#[component]
pub fn Guarded(
    /// Route requires a session.
    #[prop(optional)]
    private: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let routes = expect_context::<ClientConfig>().routes;
    let location = use_location();
    let navigate = use_navigate();

    let outcome = move || {
        if !auth.is_restored() {
            return None;
        }
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let requested = if search.is_empty() {
            location.pathname.get()
        } else {
            format!("{}?{search}", location.pathname.get())
        };
        Some(evaluate(&routes, private, auth.is_authenticated(), &requested))
    };

    let redirect = outcome.clone();
    Effect::new(move || {
        if let Some(GuardOutcome::Redirect(target)) = redirect() {
            log::debug!("route guard redirect to {}", target.href());
            navigate(&target.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let render = Memo::new(move |_| matches!(outcome(), Some(GuardOutcome::Render)));
    move || render.get().then(|| children())
}

use super::*;

fn routes() -> GuardRoutes {
    GuardRoutes { public_landing: "/".to_owned(), authenticated_landing: "/dashboard".to_owned() }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn private_route_with_session_renders() {
    assert_eq!(evaluate(&routes(), true, true, "/profile"), GuardOutcome::Render);
}

#[test]
fn private_route_without_session_redirects_to_public_landing_with_origin() {
    let outcome = evaluate(&routes(), true, false, "/profile");
    assert_eq!(
        outcome,
        GuardOutcome::Redirect(RedirectTarget { to: "/".to_owned(), from: Some("/profile".to_owned()) })
    );
}

#[test]
fn public_route_with_session_redirects_to_authenticated_landing() {
    let outcome = evaluate(&routes(), false, true, "/signup");
    assert_eq!(outcome, GuardOutcome::Redirect(RedirectTarget { to: "/dashboard".to_owned(), from: None }));
}

#[test]
fn public_route_without_session_renders() {
    assert_eq!(evaluate(&routes(), false, false, "/"), GuardOutcome::Render);
}

#[test]
fn landing_routes_come_from_configuration() {
    let custom = GuardRoutes { public_landing: "/entrar".to_owned(), authenticated_landing: "/agenda".to_owned() };
    let GuardOutcome::Redirect(anon) = evaluate(&custom, true, false, "/x") else {
        panic!("expected redirect");
    };
    assert_eq!(anon.to, "/entrar");
    let GuardOutcome::Redirect(authed) = evaluate(&custom, false, true, "/entrar") else {
        panic!("expected redirect");
    };
    assert_eq!(authed.to, "/agenda");
}

// =============================================================
// Post-login return
// =============================================================

#[test]
fn public_route_with_session_honors_safe_return_path() {
    let outcome = evaluate(&routes(), false, true, "/?from=%2Fprofile");
    assert_eq!(outcome, GuardOutcome::Redirect(RedirectTarget { to: "/profile".to_owned(), from: None }));
}

#[test]
fn public_route_with_session_ignores_foreign_return_path() {
    for requested in ["/?from=https%3A%2F%2Fevil.example", "/?from=%2F%2Fevil.example", "/?from="] {
        let outcome = evaluate(&routes(), false, true, requested);
        assert_eq!(
            outcome,
            GuardOutcome::Redirect(RedirectTarget { to: "/dashboard".to_owned(), from: None }),
            "{requested}"
        );
    }
}

#[test]
fn redirect_href_encodes_origin() {
    let target = RedirectTarget { to: "/".to_owned(), from: Some("/profile?tab=a b".to_owned()) };
    assert_eq!(target.href(), "/?from=%2Fprofile%3Ftab%3Da+b");
}

#[test]
fn redirect_href_round_trips_through_return_path() {
    let target = RedirectTarget { to: "/".to_owned(), from: Some("/profile?tab=1".to_owned()) };
    assert_eq!(return_path(&target.href()).as_deref(), Some("/profile?tab=1"));
}

#[test]
fn redirect_href_without_origin_is_plain_path() {
    let target = RedirectTarget { to: "/dashboard".to_owned(), from: None };
    assert_eq!(target.href(), "/dashboard");
}

#[test]
fn safe_return_path_rejects_backslash_tricks() {
    assert_eq!(safe_return_path("/\\evil.example"), None);
    assert_eq!(safe_return_path("/ok"), Some("/ok".to_owned()));
}

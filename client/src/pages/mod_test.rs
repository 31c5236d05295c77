use leptos::prelude::{Owner, provide_context};

use super::*;

#[test]
fn landing_routes_follow_provided_config() {
    let owner = Owner::new();
    owner.with(|| {
        let mut config = ClientConfig::default();
        config.routes = GuardRoutes { public_landing: "/entrar".to_owned(), authenticated_landing: "/agenda".to_owned() };
        provide_context(config);

        let routes = landing_routes();
        assert_eq!(routes.public_landing, "/entrar");
        assert_eq!(routes.authenticated_landing, "/agenda");
    });
}

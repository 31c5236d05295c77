//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::guarded::Guarded` calls [`evaluate`] on every navigation and
//! session change; this module holds the decision itself so it stays a pure
//! function of route privacy, session presence, and the requested location.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use url::form_urlencoded;

/// Query parameter that carries the originally requested location.
pub const RETURN_PARAM: &str = "from";

/// Landing routes supplied by configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRoutes {
    /// Where anonymous users land (sign-in).
    pub public_landing: String,
    /// Where authenticated users land (dashboard).
    pub authenticated_landing: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTarget {
    pub to: String,
    /// Location the user originally asked for, for post-login return.
    pub from: Option<String>,
}

impl RedirectTarget {
    pub fn href(&self) -> String {
        match &self.from {
            Some(from) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(RETURN_PARAM, from)
                    .finish();
                format!("{}?{query}", self.to)
            }
            None => self.to.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(RedirectTarget),
}

/// Decide whether `requested` (path plus optional `?query`) renders or
/// redirects.
///
/// | private | authenticated | outcome                                      |
/// |---------|---------------|----------------------------------------------|
/// | yes     | yes           | render                                       |
/// | yes     | no            | public landing, carrying `requested`         |
/// | no      | yes           | safe `from` of `requested`, else auth landing |
/// | no      | no            | render                                       |
pub fn evaluate(routes: &GuardRoutes, private: bool, authenticated: bool, requested: &str) -> GuardOutcome {
    match (private, authenticated) {
        (true, true) | (false, false) => GuardOutcome::Render,
        (true, false) => GuardOutcome::Redirect(RedirectTarget {
            to: routes.public_landing.clone(),
            from: Some(requested.to_owned()),
        }),
        (false, true) => {
            let to = return_path(requested).unwrap_or_else(|| routes.authenticated_landing.clone());
            GuardOutcome::Redirect(RedirectTarget { to, from: None })
        }
    }
}

/// The safe `from` value carried in `requested`'s query string, if any.
pub fn return_path(requested: &str) -> Option<String> {
    let (_, query) = requested.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == RETURN_PARAM)
        .and_then(|(_, value)| safe_return_path(&value))
}

/// Accept only same-origin absolute paths (`/x`), never `//host` or `scheme:`.
pub fn safe_return_path(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    let same_origin = candidate.starts_with('/') && !candidate.starts_with("//") && !candidate.contains('\\');
    same_origin.then(|| candidate.to_owned())
}

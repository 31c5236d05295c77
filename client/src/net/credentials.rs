//! Bearer credential lookup consulted by `ApiClient` on every request.

/// Yields the bearer token to attach to an outgoing request, if any.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// Provider for public endpoints: never attaches a credential.
#[derive(Clone, Copy, Debug, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn bearer_token(&self) -> Option<String> {
        (**self).bearer_token()
    }
}

//! REST client for the remote GoBarber API.
//!
//! DESIGN
//! ======
//! There is no mutable "default header" shared across requests. Calls that
//! need authentication take a `CredentialProvider` and consult it while the
//! request is being built, so the token in flight is always the one the
//! session holds at send time.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status`; callers surface any
//! `ApiError` as a generic error toast and log the cause.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::credentials::{Anonymous, CredentialProvider};
use super::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
use super::types::{
    ForgotPasswordRequest, Identity, ProfileUpdate, ResetPasswordRequest, SessionPayload, SignInCredentials,
    SignUpRequest, Upload,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Create a session via `POST /sessions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// credentials, or the response body is not a session.
    pub async fn create_session(&self, credentials: &SignInCredentials) -> Result<SessionPayload, ApiError> {
        let resp = self.send(Method::Post, "sessions", json_body(credentials)?, &Anonymous).await?;
        decode(&resp)
    }

    /// Register a new user via `POST /users`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the user.
    pub async fn create_user(&self, request: &SignUpRequest) -> Result<Identity, ApiError> {
        let resp = self.send(Method::Post, "users", json_body(request)?, &Anonymous).await?;
        decode(&resp)
    }

    /// Request a recovery e-mail via `POST /password/forgot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds non-2xx.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let body = json_body(&ForgotPasswordRequest { email: email.to_owned() })?;
        self.send(Method::Post, "password/forgot", body, &Anonymous).await?;
        Ok(())
    }

    /// Set a new password with a recovery token via `POST /password/reset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds non-2xx.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.send(Method::Post, "password/reset", json_body(request)?, &Anonymous).await?;
        Ok(())
    }

    /// Update the signed-in user's profile via `PUT /profile`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the update,
    /// or the response body is not an identity.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        credentials: &impl CredentialProvider,
    ) -> Result<Identity, ApiError> {
        let resp = self
            .send(Method::Put, "profile", json_body(update)?, credentials)
            .await?;
        decode(&resp)
    }

    /// Replace the signed-in user's avatar via multipart `PATCH /users/avatar`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the file,
    /// or the response body is not an identity.
    pub async fn update_avatar(
        &self,
        upload: Upload,
        credentials: &impl CredentialProvider,
    ) -> Result<Identity, ApiError> {
        let resp = self
            .send(Method::Patch, "users/avatar", RequestBody::Multipart(upload), credentials)
            .await?;
        decode(&resp)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        credentials: &impl CredentialProvider,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.endpoint(path),
            bearer: credentials.bearer_token(),
            body,
        };
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(resp)
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

//! Wire DTOs for the remote GoBarber REST API.
//!
//! DESIGN
//! ======
//! Response types accept the field spellings the API has used over time
//! (`user` vs `identity`, `avatar_url` vs `avatarURL`) so persisted sessions
//! from older builds still deserialize. Request types are camelCase on the
//! wire to match the API's body parsers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/sessions`, `/users`, `/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Public avatar URL, if the user uploaded one.
    #[serde(default, alias = "avatarURL")]
    pub avatar_url: Option<String>,
}

/// An authenticated identity paired with its bearer credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Response body of `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionPayload {
    pub token: String,
    #[serde(alias = "user")]
    pub identity: Identity,
}

impl From<SessionPayload> for Session {
    fn from(payload: SessionPayload) -> Self {
        Self { token: payload.token, identity: payload.identity }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body of `PUT /profile`. Password fields travel only as a complete group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub password_change: Option<PasswordChange>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// A file picked for multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    /// Multipart form field name.
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

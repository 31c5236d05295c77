//! Shared fixtures for unit tests: a scripted transport and sample identities.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::net::api::{ApiClient, ApiError};
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::net::types::Identity;

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Network("no scripted response".to_owned())))
    }
}

pub fn api(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", transport.clone())
}

pub fn identity(name: &str) -> Identity {
    Identity {
        id: format!("id-{}", name.to_ascii_lowercase()),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        avatar_url: None,
    }
}

pub fn session_body(token: &str, name: &str) -> String {
    serde_json::json!({ "token": token, "user": identity(name) }).to_string()
}

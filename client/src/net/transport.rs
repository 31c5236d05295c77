//! HTTP transport seam between the API client and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds fully-resolved `HttpRequest`s (URL, bearer, body) and
//! hands them to a `Transport`. In the browser that is `GlooTransport`; tests
//! script responses through an in-memory transport instead.
//!
//! ERROR HANDLING
//! ==============
//! Transports only report transport-level failures. Status interpretation
//! (2xx vs. not) stays in `ApiClient` so every transport behaves the same.

use std::future::Future;

use super::api::ApiError;
use super::types::Upload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Patch,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Upload),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential to send as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a resolved request and returns the raw response.
pub trait Transport: Clone + 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Browser transport backed by `gloo-net` (`fetch`).
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
            };
            if let Some(value) = request.authorization_header() {
                builder = builder.header("Authorization", &value);
            }
            let prepared = match request.body {
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(upload) => builder.body(multipart_form(&upload)?),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(upload: &Upload) -> Result<web_sys::FormData, ApiError> {
    let encode_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(encode_err)?;

    let form = web_sys::FormData::new().map_err(encode_err)?;
    form.append_with_blob_and_filename(&upload.field, &blob, &upload.file_name)
        .map_err(encode_err)?;
    Ok(form)
}

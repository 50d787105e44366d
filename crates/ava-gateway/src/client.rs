//! The request helper every endpoint goes through.
//!
//! A call resolves the base URL for its execution context, attaches the
//! bearer credential when the endpoint wants one, sends exactly once, and
//! normalizes the outcome: the envelope's `data` on success, a
//! [`GatewayError`] otherwise. Failures are logged and, in browser
//! execution, pushed to the notifier.

use std::sync::Arc;

use ava_auth::CallContext;
use ava_config::ApiConfig;
use ava_core::responses::ApiEnvelope;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::GatewayError;
use crate::http::check_response;
use crate::notify::{NoopNotifier, Notifier};

/// Whether an endpoint sends the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Fail with [`GatewayError::NotAuthenticated`] before sending if there
    /// is no credential.
    Required,
    /// Send the credential when there is one.
    Optional,
    /// Never send a credential.
    Public,
}

pub(crate) enum Body {
    Empty,
    Json(String),
    Multipart(Form),
}

/// One request, built by an endpoint function.
pub(crate) struct Call {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    auth: Auth,
    accept: &'static str,
    body: Body,
}

impl Call {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            auth: Auth::Required,
            accept: "application/json",
            body: Body::Empty,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) const fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Accept any media type, for file downloads.
    pub(crate) const fn accept_any(mut self) -> Self {
        self.accept = "*/*";
        self
    }

    /// Append a query parameter. Repeating a key repeats it on the wire.
    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn query_pairs(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, GatewayError> {
        let json = serde_json::to_string(body).map_err(|e| GatewayError::Encode(e.to_string()))?;
        self.body = Body::Json(json);
        Ok(self)
    }

    pub(crate) fn multipart(mut self, form: Form) -> Self {
        self.body = Body::Multipart(form);
        self
    }

    fn url(&self, base: &str) -> String {
        let mut url = format!("{base}{}", self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

/// Binary payload returned by file download endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    /// Response `Content-Type`, `application/octet-stream` when absent.
    pub mime_type: String,
}

/// HTTP client for the AVA backend.
///
/// Endpoint methods live in the per-resource modules; each takes the
/// [`CallContext`] that decides base URL, credential source and whether
/// failures are notified.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a client with a no-op notifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GatewayError::Network)?;
        Ok(Self {
            http,
            config,
            notifier: Arc::new(NoopNotifier),
        })
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a call and return the raw success response.
    async fn execute(
        &self,
        ctx: &CallContext,
        call: Call,
    ) -> Result<reqwest::Response, GatewayError> {
        let base = self.config.base_url(ctx.execution())?;
        let bearer = match call.auth {
            Auth::Public => None,
            Auth::Optional => ctx.bearer(),
            Auth::Required => Some(ctx.bearer().ok_or(GatewayError::NotAuthenticated)?),
        };

        let url = call.url(&base);
        let Call {
            method,
            path,
            accept,
            body,
            ..
        } = call;

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, accept);
        if let Some(token) = &bearer {
            request = request.header(AUTHORIZATION, token.header_value());
        }
        request = match body {
            Body::Empty => request,
            Body::Json(json) => request.header(CONTENT_TYPE, "application/json").body(json),
            Body::Multipart(form) => request.multipart(form),
        };

        tracing::debug!(
            %method,
            path = %path,
            context = %ctx.execution(),
            authenticated = bearer.is_some(),
            "sending request"
        );
        let resp = request.send().await.map_err(GatewayError::Network)?;
        tracing::debug!(
            %method,
            path = %path,
            status = resp.status().as_u16(),
            "response received"
        );

        check_response(resp).await
    }

    /// Log a failure and notify it in browser execution.
    fn report<T>(
        &self,
        ctx: &CallContext,
        path: &str,
        result: Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        if let Err(error) = &result {
            tracing::warn!(path, status = ?error.status(), %error, "request failed");
            if ctx.execution().can_notify() {
                self.notifier.error(&error.to_string());
            }
        }
        result
    }

    /// Send and unwrap the envelope's `data`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        call: Call,
    ) -> Result<T, GatewayError> {
        let path = call.path.clone();
        let result = match self.execute(ctx, call).await {
            Ok(resp) => decode_envelope::<T>(resp).await,
            Err(e) => Err(e),
        };
        self.report(ctx, &path, result)
    }

    /// Send and ignore any response body.
    pub(crate) async fn send_unit(
        &self,
        ctx: &CallContext,
        call: Call,
    ) -> Result<(), GatewayError> {
        let path = call.path.clone();
        let result = self.execute(ctx, call).await.map(drop);
        self.report(ctx, &path, result)
    }

    /// Send a list request. A 404 means "nothing yet" and yields an empty
    /// list without notifying.
    pub(crate) async fn send_list_or_empty<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        call: Call,
    ) -> Result<Vec<T>, GatewayError> {
        let path = call.path.clone();
        let result = match self.execute(ctx, call).await {
            Ok(resp) => decode_envelope::<Option<Vec<T>>>(resp)
                .await
                .map(Option::unwrap_or_default),
            Err(GatewayError::Api { status: 404, .. }) => {
                tracing::debug!(path, "list endpoint returned 404, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        };
        self.report(ctx, &path, result)
    }

    /// Send and return the raw body with its content type.
    pub(crate) async fn send_bytes(
        &self,
        ctx: &CallContext,
        call: Call,
    ) -> Result<Download, GatewayError> {
        let path = call.path.clone();
        let result = match self.execute(ctx, call).await {
            Ok(resp) => read_download(resp).await,
            Err(e) => Err(e),
        };
        self.report(ctx, &path, result)
    }
}

async fn decode_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, GatewayError> {
    let bytes = resp.bytes().await.map_err(GatewayError::Network)?;
    let envelope: ApiEnvelope<T> =
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

async fn read_download(resp: reqwest::Response) -> Result<Download, GatewayError> {
    let mime_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = resp.bytes().await.map_err(GatewayError::Network)?;
    Ok(Download {
        bytes: bytes.to_vec(),
        mime_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_query() {
        let call = Call::get("/class/all");
        assert_eq!(call.url("http://api"), "http://api/class/all");
    }

    #[test]
    fn url_with_repeated_keys_and_encoding() {
        let call = Call::get("/ranking/by-class/3")
            .query("knowledgeTrailIds", 1)
            .query("knowledgeTrailIds", 2)
            .query("name", "Ana Maria&co");
        assert_eq!(
            call.url("http://api"),
            "http://api/ranking/by-class/3?knowledgeTrailIds=1&knowledgeTrailIds=2&name=Ana%20Maria%26co"
        );
    }

    #[test]
    fn calls_default_to_required_auth() {
        assert_eq!(Call::post("/x").auth, Auth::Required);
        assert_eq!(Call::post("/x").auth(Auth::Public).auth, Auth::Public);
    }

    #[tokio::test]
    async fn download_defaults_mime_type() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body(vec![1u8, 2, 3])
                .unwrap(),
        );
        let download = read_download(resp).await.unwrap();
        assert_eq!(download.mime_type, "application/octet-stream");
        assert_eq!(download.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn envelope_decoding_errors_are_decode_errors() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body("not json")
                .unwrap(),
        );
        let err = decode_envelope::<u32>(resp).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }
}

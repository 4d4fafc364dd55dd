//! API Client
//!
//! The one place that talks HTTP. Every service builds an [`ApiRequest`] and
//! hands it to [`ApiClient::send`], which
//!
//! - attaches `Authorization: Bearer <token>` when the session holds a token,
//! - maps non-2xx responses to [`ApiError`] with a fixed or body-derived message,
//! - on 401 expires the session if the rejected token is still the current
//!   one (clearing the stored token) before failing,
//! - decodes JSON bodies, and returns anything else as text.
//!
//! Requests are never retried.

use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::client::session::Session;
use crate::shared::config::AppConfig;
use crate::shared::error::ApiError;

const USER_AGENT: &str = concat!("cloudvault/", env!("CARGO_PKG_VERSION"));

/// Query string parameters. Empty values are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless `value` is empty.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.0.push((key.to_string(), value));
        }
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Request payload
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Form),
}

/// A request for one endpoint, built by a service
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: RequestBody,
    /// Set for login and register: sent without a bearer token, and a 401
    /// carries the server's message (or this fallback) instead of expiring
    /// the session.
    pub credentials: Option<&'static str>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: RequestBody::Empty,
            credentials: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Mark this request as a credential exchange, with the message to show
    /// when the server rejects it without one.
    pub fn credentials(mut self, failure_message: &'static str) -> Self {
        self.credentials = Some(failure_message);
        self
    }
}

/// Decoded success body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Deserialize into `T`. Text bodies are accepted when they happen to be
    /// JSON; an empty body reads as `null`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) if text.trim().is_empty() => {
                Ok(serde_json::from_value(Value::Null)?)
            }
            ResponseBody::Text(text) => serde_json::from_str(&text).map_err(|_| {
                ApiError::decode(format!(
                    "expected JSON, got text: {}",
                    text.chars().take(80).collect::<String>()
                ))
            }),
        }
    }
}

/// HTTP client bound to one API base URL and one session
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        config.validate()?;
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Network)?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Send a request and decode the body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send_raw(request).await?.into_typed()
    }

    /// Send a request and return the body as JSON or text.
    pub async fn send_raw(&self, request: ApiRequest) -> Result<ResponseBody, ApiError> {
        let response = self.dispatch(request).await?;
        decode_body(response).await
    }

    /// Send a request and return the raw bytes of a successful response.
    pub async fn download(&self, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        let response = self.dispatch(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Stream a successful response body into `writer`. Returns bytes written.
    pub async fn download_to<W>(&self, request: ApiRequest, writer: &mut W) -> Result<u64, ApiError>
    where
        W: AsyncWrite + Unpin,
    {
        let response = self.dispatch(request).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            credentials,
        } = request;
        let url = self.config.endpoint_url(&path);

        let mut builder = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(query.as_pairs());
        }
        let token = match credentials {
            Some(_) => None,
            None => self.session.token().await,
        };
        if let Some(token) = &token {
            builder = builder.bearer_auth(token);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        debug!(%method, %path, "sending request");
        let response = builder.send().await.map_err(|e| {
            warn!(%method, %path, error = %e, "request failed before a response arrived");
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!(%method, %path, status = status.as_u16(), "response received");
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() != 401 {
            return Err(failure(response).await);
        }
        if let Some(fallback) = credentials {
            let message = body_message(response).await;
            return Err(ApiError::credentials_rejected(message, fallback));
        }
        warn!("server rejected the bearer token");
        self.session.expire(token.as_deref()).await;
        Err(ApiError::Unauthorized)
    }
}

async fn body_message(response: Response) -> Option<String> {
    response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
}

async fn failure(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match status {
        403 | 404 | 429 => None,
        s if s >= 500 => None,
        _ => body_message(response).await,
    };
    ApiError::from_status(status, message)
}

async fn decode_body(response: Response) -> Result<ResponseBody, ApiError> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    let text = response.text().await?;
    if !is_json {
        return Ok(ResponseBody::Text(text));
    }
    if text.trim().is_empty() {
        return Ok(ResponseBody::Json(Value::Null));
    }
    Ok(ResponseBody::Json(serde_json::from_str(&text)?))
}

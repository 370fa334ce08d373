//! # API Client
//!
//! The request gateway shared by every endpoint module.
//!
//! [`ApiClient::send`] is the only place that talks to the transport:
//!
//! 1. `Content-Type: application/json` is added unless the caller set one.
//! 2. For authenticated requests the token is read from the [`AuthStore`];
//!    without one the call fails with 401 before touching the network.
//! 3. The response is decoded according to its declared content type, and
//!    every non-2xx status becomes an [`ApiError`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde_json::Value;
use shared::{
    AuthResponse, CheckoutSessionResponse, CreateTradeData, MistakeAnalysis, SetupPerformance,
    SubscriptionInterval, SymbolPerformance, Trade, TradeAnalytics, TradeFilters, UpdateTradeData,
    User,
};
use uuid::Uuid;

use super::request::ApiRequest;
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport};
use super::{analytics, auth, subscriptions, trades};
use crate::config::FrontendConfig;
use crate::core::error::{ApiError, Result, GENERIC_FAILURE};
use crate::core::service::{ApiService, HttpTransport};
use crate::state::AuthStore;

/// HTTP client for communicating with the trade journal backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: Arc<AuthStore>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Client using the default `reqwest` transport.
    pub fn new(config: &FrontendConfig, store: Arc<AuthStore>) -> Self {
        Self::with_transport(config, store, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(
        config: &FrontendConfig,
        store: Arc<AuthStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            store,
            transport,
        }
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<AuthStore> {
        &self.store
    }

    /// Send `request` and decode a successful response as `T`.
    ///
    /// Non-JSON success bodies are handed to `T` as a plain string, so `T`
    /// should be `String` (or another type that deserializes from a string)
    /// for endpoints that answer with text.
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method, path = %request.path, auth = request.requires_auth)
    )]
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let prepared = self.prepare(request)?;
        let start = start_timer();

        let response = self.transport.execute(prepared).await?;

        tracing::debug!(
            status = response.status,
            content_type = response.content_type.as_deref().unwrap_or(""),
            duration_ms = elapsed_ms(start),
            "Response received"
        );

        decode(response)
    }

    fn prepare(&self, request: ApiRequest) -> Result<HttpRequest> {
        let ApiRequest {
            method,
            path,
            headers: caller_headers,
            body,
            requires_auth,
        } = request;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in caller_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        if requires_auth {
            let Some(token) = self.store.get_token() else {
                tracing::warn!(path = %path, "Authenticated request without a stored token");
                return Err(ApiError::missing_credential());
            };
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::invalid_request(format!("stored token is not a valid header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ApiService for ApiClient {
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        auth::register(self, name, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn me(&self) -> Result<User> {
        auth::me(self).await
    }

    async fn create_checkout_session(
        &self,
        interval: SubscriptionInterval,
    ) -> Result<CheckoutSessionResponse> {
        subscriptions::create_checkout_session(self, interval).await
    }

    async fn create_trade(&self, data: &CreateTradeData) -> Result<Trade> {
        trades::create(self, data).await
    }

    async fn list_trades(&self, filters: &TradeFilters) -> Result<Vec<Trade>> {
        trades::list(self, filters).await
    }

    async fn get_trade(&self, id: Uuid) -> Result<Trade> {
        trades::get(self, id).await
    }

    async fn update_trade(&self, id: Uuid, data: &UpdateTradeData) -> Result<Trade> {
        trades::update(self, id, data).await
    }

    async fn delete_trade(&self, id: Uuid) -> Result<()> {
        trades::delete(self, id).await
    }

    async fn analytics_overview(&self) -> Result<TradeAnalytics> {
        analytics::overview(self).await
    }

    async fn analytics_by_symbol(&self) -> Result<Vec<SymbolPerformance>> {
        analytics::by_symbol(self).await
    }

    async fn analytics_by_setup(&self) -> Result<Vec<SetupPerformance>> {
        analytics::by_setup(self).await
    }

    async fn analytics_mistakes(&self) -> Result<Vec<MistakeAnalysis>> {
        analytics::mistakes(self).await
    }
}

/// Turn a raw response into `T` or the matching [`ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let status = response.status;

    if !response.is_json() {
        if !response.is_success() {
            tracing::warn!(status, "Request failed with non-JSON body");
            return Err(ApiError::status(status, GENERIC_FAILURE, None));
        }
        let text: serde::de::value::StringDeserializer<serde::de::value::Error> =
            response.body.into_deserializer();
        return T::deserialize(text).map_err(|e| {
            tracing::error!(error = %e, status, "Text response does not match expected type");
            ApiError::malformed_body(status, e.to_string())
        });
    }

    let data: Value = serde_json::from_str(&response.body).map_err(|e| {
        tracing::error!(error = %e, status, "Response body is not valid JSON");
        ApiError::malformed_body(status, e.to_string())
    })?;

    if !response.is_success() {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_FAILURE);
        let details = data
            .get("details")
            .and_then(Value::as_str)
            .map(str::to_string);
        tracing::warn!(status, error = %message, "Request failed");
        return Err(ApiError::status(status, message, details));
    }

    serde_json::from_value(data).map_err(|e| {
        tracing::error!(error = %e, status, "Failed to parse response");
        ApiError::malformed_body(status, e.to_string())
    })
}

// Instant::now() panics on wasm32-unknown-unknown
#[cfg(not(target_arch = "wasm32"))]
fn start_timer() -> Option<std::time::Instant> {
    Some(std::time::Instant::now())
}

#[cfg(target_arch = "wasm32")]
fn start_timer() -> Option<std::time::Instant> {
    None
}

fn elapsed_ms(start: Option<std::time::Instant>) -> u64 {
    start
        .map(|s| u64::try_from(s.elapsed().as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::state::STORAGE_KEY;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde::de::IgnoredAny;
    use std::collections::VecDeque;

    /// Transport that records requests and replays canned responses.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        pub requests: Mutex<Vec<HttpRequest>>,
        responses: Mutex<VecDeque<HttpResponse>>,
    }

    impl MockTransport {
        pub fn replying(responses: Vec<HttpResponse>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            })
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().len()
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests.lock().last().cloned().expect("no request recorded")
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .ok_or_else(|| ApiError::transport("no canned response"))
        }
    }

    pub(crate) fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    pub(crate) fn text_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.to_string(),
        }
    }

    /// Client over a mock transport, optionally with a stored token.
    pub(crate) fn client_with(
        token: Option<&str>,
        responses: Vec<HttpResponse>,
    ) -> (ApiClient, Arc<MockTransport>) {
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.set(STORAGE_KEY, Some(token)).unwrap();
        }
        let store = Arc::new(AuthStore::new(Arc::new(storage)));
        let transport = MockTransport::replying(responses);
        let config = FrontendConfig::new("http://api.test").unwrap();
        let client = ApiClient::with_transport(&config, store, transport.clone());
        (client, transport)
    }

    // ========== Headers ==========

    #[tokio::test]
    async fn test_default_content_type_and_url() {
        let (client, transport) = client_with(None, vec![json_response(200, "{}")]);

        let _: Value = client.send(ApiRequest::get("/api/ping")).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, "http://api.test/api/ping");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert!(request.headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let (client, transport) = client_with(None, vec![json_response(200, "{}")]);

        let request = ApiRequest::post("/upload")
            .header("content-type", "text/csv")
            .unwrap()
            .header("x-request-id", "abc")
            .unwrap();
        let _: Value = client.send(request).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.headers[CONTENT_TYPE], "text/csv");
        assert_eq!(sent.headers["x-request-id"], "abc");
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_required() {
        let (client, transport) = client_with(Some("tok123"), vec![json_response(200, "[]")]);

        let _: Vec<Value> = client
            .send(ApiRequest::get("/api/trades").authenticated())
            .await
            .unwrap();

        assert_eq!(transport.last_request().headers[AUTHORIZATION], "Bearer tok123");
    }

    #[tokio::test]
    async fn test_token_not_attached_to_public_requests() {
        let (client, transport) = client_with(Some("tok123"), vec![json_response(200, "{}")]);

        let _: Value = client.send(ApiRequest::post("/api/auth/login")).await.unwrap();

        assert!(transport.last_request().headers.get(AUTHORIZATION).is_none());
    }

    // ========== Missing credential ==========

    #[tokio::test]
    async fn test_missing_token_fails_without_network_call() {
        let (client, transport) = client_with(None, vec![json_response(200, "{}")]);

        let err = client
            .send::<Value>(ApiRequest::get("/api/auth/me").authenticated())
            .await
            .unwrap_err();

        assert_eq!(err.status, 401);
        assert_eq!(err.kind, ErrorKind::MissingCredential);
        assert_eq!(transport.calls(), 0);
    }

    // ========== Response decoding ==========

    #[tokio::test]
    async fn test_structured_error_body() {
        let (client, _) = client_with(
            Some("tok"),
            vec![json_response(403, r#"{"error":"Forbidden","details":"role required"}"#)],
        );

        let err = client
            .send::<Value>(ApiRequest::get("/api/admin").authenticated())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Status);
        assert_eq!(err.status, 403);
        assert_eq!(err.message, "Forbidden");
        assert_eq!(err.details.as_deref(), Some("role required"));
    }

    #[tokio::test]
    async fn test_json_error_without_error_field_is_generic() {
        let (client, _) = client_with(None, vec![json_response(400, r#"{"message":"nope"}"#)]);

        let err = client.send::<Value>(ApiRequest::get("/x")).await.unwrap_err();

        assert_eq!(err.status, 400);
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(err.details, None);
    }

    #[tokio::test]
    async fn test_text_success_returns_body() {
        let (client, _) = client_with(None, vec![text_response(200, "OK")]);

        let body: String = client.send(ApiRequest::get("/health")).await.unwrap();

        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_text_failure_is_generic_with_status() {
        let (client, _) = client_with(None, vec![text_response(502, "<html>Bad Gateway</html>")]);

        let err = client.send::<String>(ApiRequest::get("/x")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Status);
        assert_eq!(err.status, 502);
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(err.details, None);
    }

    #[tokio::test]
    async fn test_unparsable_json_error_body() {
        let (client, _) = client_with(None, vec![json_response(500, "Internal <b>oops")]);

        let err = client.send::<Value>(ApiRequest::get("/x")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::MalformedBody);
        assert_eq!(err.status, 500);
        assert_eq!(err.message, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_success_with_wrong_shape_is_malformed() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            id: u32,
        }

        let (client, _) = client_with(None, vec![json_response(200, r#"{"name":"x"}"#)]);

        let err = client.send::<Expected>(ApiRequest::get("/x")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::MalformedBody);
        assert_eq!(err.status, 200);
    }

    #[tokio::test]
    async fn test_empty_no_content_response_can_be_ignored() {
        let response = HttpResponse {
            status: 204,
            content_type: None,
            body: String::new(),
        };
        let (client, _) = client_with(Some("tok"), vec![response]);

        let result: Result<IgnoredAny> = client
            .send(ApiRequest::delete("/api/trades/1").authenticated())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (client, _) = client_with(None, vec![]);

        let err = client.send::<Value>(ApiRequest::get("/x")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.status, 0);
    }
}

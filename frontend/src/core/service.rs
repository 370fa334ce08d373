//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! - [`HttpTransport`] is the seam between the request gateway and the network.
//!   Production code uses [`ReqwestTransport`](crate::services::api::ReqwestTransport);
//!   tests plug in a recording mock.
//! - [`ApiService`] is the full set of backend operations. The session workflows
//!   in [`crate::services::session`] depend on it rather than on
//!   [`ApiClient`](crate::services::api::ApiClient) directly.
//!
//! On `wasm32` the futures returned by the browser fetch API are not `Send`,
//! so the traits are declared `?Send` there.

use async_trait::async_trait;
use shared::{
    AuthResponse, CheckoutSessionResponse, CreateTradeData, MistakeAnalysis, SetupPerformance,
    SubscriptionInterval, SymbolPerformance, Trade, TradeAnalytics, TradeFilters, UpdateTradeData,
    User,
};
use uuid::Uuid;

use super::error::Result;
use crate::services::api::transport::{HttpRequest, HttpResponse};

/// Executes a fully prepared HTTP request.
///
/// Implementations return `Err` only when no response was received; every
/// HTTP status, including 4xx/5xx, is a successful [`HttpResponse`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Trait for backend API operations
///
/// This trait allows for dependency injection and mocking in tests.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ApiService: Send + Sync {
    /// Create an account and receive a session token
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse>;

    /// Login with email and password
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Fetch the profile of the token holder
    async fn me(&self) -> Result<User>;

    /// Start a hosted checkout for a paid plan
    async fn create_checkout_session(
        &self,
        interval: SubscriptionInterval,
    ) -> Result<CheckoutSessionResponse>;

    async fn create_trade(&self, data: &CreateTradeData) -> Result<Trade>;

    async fn list_trades(&self, filters: &TradeFilters) -> Result<Vec<Trade>>;

    async fn get_trade(&self, id: Uuid) -> Result<Trade>;

    async fn update_trade(&self, id: Uuid, data: &UpdateTradeData) -> Result<Trade>;

    async fn delete_trade(&self, id: Uuid) -> Result<()>;

    async fn analytics_overview(&self) -> Result<TradeAnalytics>;

    async fn analytics_by_symbol(&self) -> Result<Vec<SymbolPerformance>>;

    async fn analytics_by_setup(&self) -> Result<Vec<SetupPerformance>>;

    async fn analytics_mistakes(&self) -> Result<Vec<MistakeAnalysis>>;
}

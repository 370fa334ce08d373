//! Read-only analytics endpoints. All of them require a token.

use shared::{MistakeAnalysis, SetupPerformance, SymbolPerformance, TradeAnalytics};

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::core::error::Result;

/// Overall journal statistics.
pub async fn overview(client: &ApiClient) -> Result<TradeAnalytics> {
    client
        .send(ApiRequest::get("/api/analytics/overview").authenticated())
        .await
}

pub async fn by_symbol(client: &ApiClient) -> Result<Vec<SymbolPerformance>> {
    client
        .send(ApiRequest::get("/api/analytics/symbols").authenticated())
        .await
}

pub async fn by_setup(client: &ApiClient) -> Result<Vec<SetupPerformance>> {
    client
        .send(ApiRequest::get("/api/analytics/setups").authenticated())
        .await
}

/// Mistake tags with their count and P&L impact.
pub async fn mistakes(client: &ApiClient) -> Result<Vec<MistakeAnalysis>> {
    client
        .send(ApiRequest::get("/api/analytics/mistakes").authenticated())
        .await
}

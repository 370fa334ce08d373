//! # Trade Endpoints
//!
//! CRUD for journal entries. Every route is protected, so all requests carry
//! the stored bearer token.

use serde::de::IgnoredAny;
use shared::{CreateTradeData, Trade, TradeFilters, UpdateTradeData};
use uuid::Uuid;

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::core::error::Result;

/// Record a new trade.
#[tracing::instrument(skip(client, data), fields(symbol = %data.symbol))]
pub async fn create(client: &ApiClient, data: &CreateTradeData) -> Result<Trade> {
    let trade: Trade = client
        .send(ApiRequest::post("/api/trades").json(data)?.authenticated())
        .await?;
    tracing::info!(trade_id = %trade.id, "Trade created");
    Ok(trade)
}

/// List trades matching `filters`; unset filters are not sent.
pub async fn list(client: &ApiClient, filters: &TradeFilters) -> Result<Vec<Trade>> {
    let request = ApiRequest::get("/api/trades")
        .query(&filters.query_pairs())
        .authenticated();
    let trades: Vec<Trade> = client.send(request).await?;
    tracing::debug!(count = trades.len(), "Trades loaded");
    Ok(trades)
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Trade> {
    client
        .send(ApiRequest::get(format!("/api/trades/{id}")).authenticated())
        .await
}

/// Apply a partial update.
#[tracing::instrument(skip(client, data))]
pub async fn update(client: &ApiClient, id: Uuid, data: &UpdateTradeData) -> Result<Trade> {
    client
        .send(
            ApiRequest::put(format!("/api/trades/{id}"))
                .json(data)?
                .authenticated(),
        )
        .await
}

/// Delete a trade. The backend answers 204; failures are reported like any other call.
#[tracing::instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: Uuid) -> Result<()> {
    let _: IgnoredAny = client
        .send(ApiRequest::delete(format!("/api/trades/{id}")).authenticated())
        .await?;
    tracing::info!("Trade deleted");
    Ok(())
}

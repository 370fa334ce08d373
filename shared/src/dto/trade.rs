use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Side of a trade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Long => "long",
            TradeDirection::Short => "short",
        }
    }
}

/// Lifecycle status of a journal entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
    Pending,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Open => "open",
            TradeStatus::Closed => "closed",
            TradeStatus::Pending => "pending",
        }
    }
}

/// A journaled trade as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: Uuid,
    pub symbol: String,
    pub direction: TradeDirection,
    pub entry_price: Decimal,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    pub quantity: Decimal,
    pub entry_time: DateTime<Utc>,
    #[serde(default)]
    pub exit_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
    #[serde(default)]
    pub pnl_percentage: Option<Decimal>,
    pub fees: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub setup_type: Option<String>,
    #[serde(default)]
    pub mistakes: Vec<String>,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub broker: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trade {
    /// A trade is a win when its realized P&L is strictly positive.
    pub fn is_win(&self) -> bool {
        self.pnl.is_some_and(|pnl| pnl > Decimal::ZERO)
    }
}

/// Payload for creating a trade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTradeData {
    pub symbol: String,
    pub direction: TradeDirection,
    pub entry_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<Decimal>,
    pub quantity: Decimal,
    pub entry_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mistakes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl CreateTradeData {
    /// Minimal open position; optional fields can be filled in afterwards.
    pub fn new(
        symbol: impl Into<String>,
        direction: TradeDirection,
        entry_price: Decimal,
        quantity: Decimal,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            direction,
            entry_price,
            exit_price: None,
            quantity,
            entry_time,
            exit_time: None,
            fees: None,
            notes: None,
            tags: None,
            setup_type: None,
            mistakes: None,
            emotions: None,
            broker: None,
            account_id: None,
        }
    }
}

/// Partial update of a trade; only set fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTradeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<TradeDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mistakes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeStatus>,
}

/// Filters for listing trades, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeFilters {
    pub symbol: Option<String>,
    pub direction: Option<TradeDirection>,
    pub status: Option<TradeStatus>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub setup_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TradeFilters {
    /// Unencoded `(key, value)` pairs for every set filter, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(symbol) = &self.symbol {
            pairs.push(("symbol", symbol.clone()));
        }
        if let Some(direction) = self.direction {
            pairs.push(("direction", direction.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(from) = self.from_date {
            pairs.push(("from_date", from.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(to) = self.to_date {
            pairs.push(("to_date", to.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(setup_type) = &self.setup_type {
            pairs.push(("setup_type", setup_type.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trade_accepts_string_and_number_decimals() {
        let json = r#"{
            "id": "0d6f2a52-0c1a-4a4e-9a53-5b8a4e7f9c01",
            "symbol": "AAPL",
            "direction": "long",
            "entry_price": "150.25",
            "exit_price": 155.5,
            "quantity": "10",
            "entry_time": "2024-03-01T14:30:00Z",
            "exit_time": "2024-03-01T20:00:00Z",
            "pnl": "52.50",
            "pnl_percentage": "3.49",
            "fees": "0",
            "notes": null,
            "tags": ["breakout"],
            "setup_type": "flag",
            "mistakes": [],
            "emotions": ["calm"],
            "screenshots": [],
            "broker": null,
            "account_id": null,
            "status": "closed",
            "created_at": "2024-03-01T20:01:00Z",
            "updated_at": "2024-03-01T20:01:00Z"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();

        assert_eq!(trade.direction, TradeDirection::Long);
        assert_eq!(trade.entry_price, Decimal::new(15025, 2));
        assert_eq!(trade.exit_price, Some(Decimal::new(1555, 1)));
        assert_eq!(trade.status, TradeStatus::Closed);
        assert!(trade.is_win());
    }

    #[test]
    fn test_create_trade_omits_unset_fields() {
        let entry_time = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        let data = CreateTradeData::new(
            "TSLA",
            TradeDirection::Short,
            Decimal::new(2000, 1),
            Decimal::from(5),
            entry_time,
        );

        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["direction"], "short");
        assert!(!object.contains_key("exit_price"));
        assert!(!object.contains_key("tags"));
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_update_trade_only_sends_changes() {
        let update = UpdateTradeData {
            notes: Some("held too long".to_string()),
            status: Some(TradeStatus::Closed),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"notes":"held too long","status":"closed"}"#);
    }

    #[test]
    fn test_filters_query_pairs_skip_unset() {
        assert!(TradeFilters::default().is_empty());

        let filters = TradeFilters {
            symbol: Some("AAPL".to_string()),
            status: Some(TradeStatus::Open),
            from_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            limit: Some(50),
            ..Default::default()
        };

        assert_eq!(
            filters.query_pairs(),
            vec![
                ("symbol", "AAPL".to_string()),
                ("status", "open".to_string()),
                ("from_date", "2024-01-01T00:00:00Z".to_string()),
                ("limit", "50".to_string()),
            ]
        );
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall journal statistics (`GET /api/analytics/overview`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeAnalytics {
    pub total_trades: i32,
    pub winning_trades: i32,
    pub losing_trades: i32,
    pub win_rate: f64,

    pub total_pnl: Decimal,
    pub total_pnl_percentage: f64,
    pub average_win: Decimal,
    pub average_loss: Decimal,
    pub largest_win: Decimal,
    pub largest_loss: Decimal,

    pub profit_factor: f64,
    pub risk_reward_ratio: f64,

    /// Positive for a win streak, negative for a loss streak
    pub current_streak: i32,
    pub longest_win_streak: i32,
    pub longest_loss_streak: i32,
}

/// Per-symbol performance (`GET /api/analytics/symbols`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolPerformance {
    pub symbol: String,
    pub total_trades: i32,
    pub winning_trades: i32,
    pub win_rate: f64,
    pub total_pnl: Decimal,
    pub average_pnl: Decimal,
}

/// Per-setup performance (`GET /api/analytics/setups`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetupPerformance {
    pub setup_type: String,
    pub total_trades: i32,
    pub winning_trades: i32,
    pub win_rate: f64,
    pub total_pnl: Decimal,
    pub average_pnl: Decimal,
}

/// Cost of a recurring mistake tag (`GET /api/analytics/mistakes`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MistakeAnalysis {
    pub mistake: String,
    pub count: i32,
    pub average_pnl: Decimal,
    pub total_pnl: Decimal,
}

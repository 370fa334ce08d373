use serde::{Deserialize, Serialize};

/// Billing interval offered at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SubscriptionInterval {
    /// 1 month, $7/month
    #[serde(rename = "month")]
    Month,
    /// 6 months, $5/month ($30 total)
    #[serde(rename = "month_6")]
    Month6,
    /// 12 months, $4/month ($48 total)
    #[serde(rename = "year")]
    Year,
}

impl SubscriptionInterval {
    pub fn all() -> &'static [SubscriptionInterval] {
        &[
            SubscriptionInterval::Month,
            SubscriptionInterval::Month6,
            SubscriptionInterval::Year,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionInterval::Month => "month",
            SubscriptionInterval::Month6 => "month_6",
            SubscriptionInterval::Year => "year",
        }
    }

    /// Total charged per billing period, in cents.
    pub fn price_cents(&self) -> i64 {
        match self {
            SubscriptionInterval::Month => 700,
            SubscriptionInterval::Month6 => 3000,
            SubscriptionInterval::Year => 4800,
        }
    }

    pub fn monthly_price_cents(&self) -> i64 {
        match self {
            SubscriptionInterval::Month => 700,
            SubscriptionInterval::Month6 => 500,
            SubscriptionInterval::Year => 400,
        }
    }

    /// Savings relative to the monthly plan, rounded to the nearest percent.
    pub fn savings_percentage(&self) -> i32 {
        match self {
            SubscriptionInterval::Month => 0,
            SubscriptionInterval::Month6 => 29,
            SubscriptionInterval::Year => 43,
        }
    }
}

/// Checkout session request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub interval: SubscriptionInterval,
}

/// Checkout session created by the payment provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    /// Hosted checkout page the user is redirected to
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_wire_names() {
        let request = CheckoutRequest {
            interval: SubscriptionInterval::Month6,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"interval":"month_6"}"#
        );

        for interval in SubscriptionInterval::all() {
            let json = serde_json::to_string(interval).unwrap();
            assert_eq!(json, format!("\"{}\"", interval.as_str()));
        }
    }

    #[test]
    fn test_monthly_price_matches_total() {
        assert_eq!(SubscriptionInterval::Month6.monthly_price_cents() * 6, 3000);
        assert_eq!(SubscriptionInterval::Year.monthly_price_cents() * 12, 4800);
        assert_eq!(SubscriptionInterval::Month.savings_percentage(), 0);
    }

    #[test]
    fn test_savings_round_to_nearest_percent() {
        // 1 - 500/700 = 28.57%, 1 - 400/700 = 42.86%
        for interval in [SubscriptionInterval::Month6, SubscriptionInterval::Year] {
            let monthly = interval.monthly_price_cents() as f64;
            let exact = (1.0 - monthly / 700.0) * 100.0;
            assert_eq!(interval.savings_percentage(), exact.round() as i32);
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authentication response (register/login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// User profile (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    /// `none`, `active`, `canceled`, `past_due` or `trialing`
    pub subscription_status: String,
    /// `none` or `paid`
    pub subscription_tier: String,
    pub subscription_interval: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether the user currently holds a paid plan.
    pub fn has_active_subscription(&self) -> bool {
        self.subscription_tier == "paid"
            && matches!(self.subscription_status.as_str(), "active" | "trialing")
    }
}

/// Error response body returned by the backend on non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

//! # Authentication Endpoints
//!
//! Handles user registration, login and the current-user lookup.

use shared::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::core::error::Result;

/// Register a new account.
#[tracing::instrument(skip(client, name, password), fields(email = %email))]
pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse> {
    tracing::info!("Attempting registration");

    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: AuthResponse = client
        .send(ApiRequest::post("/api/auth/register").json(&request)?)
        .await?;

    tracing::info!(user_id = %response.user.id, "Registration successful");
    Ok(response)
}

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    tracing::info!("Attempting login");

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: AuthResponse = client
        .send(ApiRequest::post("/api/auth/login").json(&request)?)
        .await?;

    tracing::info!(user_id = %response.user.id, "Login successful");
    Ok(response)
}

/// Profile of the stored token's owner.
pub async fn me(client: &ApiClient) -> Result<User> {
    client
        .send(ApiRequest::get("/api/auth/me").authenticated())
        .await
}

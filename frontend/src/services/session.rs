//! # Session Workflows
//!
//! Glue between the [`ApiService`] and the [`AuthStore`]: the store stays a
//! plain state container, and the decisions about when a session is committed
//! or dropped live here.

use shared::User;

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::state::AuthStore;

/// Log in and commit the session on success.
pub async fn login(
    api: &dyn ApiService,
    store: &AuthStore,
    email: &str,
    password: &str,
) -> Result<User> {
    let response = api.login(email, password).await?;
    store.set_authenticated(response.user.clone(), response.token);
    Ok(response.user)
}

/// Register and commit the session on success.
pub async fn register(
    api: &dyn ApiService,
    store: &AuthStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    let response = api.register(name, email, password).await?;
    store.set_authenticated(response.user.clone(), response.token);
    Ok(response.user)
}

pub fn logout(store: &AuthStore) {
    store.clear_authenticated();
}

/// Confirm a restored token against the backend.
///
/// - no token: loading ends, `Ok(None)`
/// - valid token: session committed, `Ok(Some(user))`
/// - rejected token (401): session cleared, error returned
/// - anything else: loading ends but the token is kept for a later attempt
#[tracing::instrument(skip_all)]
pub async fn restore(api: &dyn ApiService, store: &AuthStore) -> Result<Option<User>> {
    let Some(token) = store.session().token else {
        store.set_loading(false);
        return Ok(None);
    };

    match api.me().await {
        Ok(user) => {
            store.set_authenticated(user.clone(), token);
            Ok(Some(user))
        }
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Stored token rejected, clearing session");
            store.clear_authenticated();
            Err(e)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not verify stored token");
            store.set_loading(false);
            Err(e)
        }
    }
}

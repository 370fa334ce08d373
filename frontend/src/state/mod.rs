//! Client-side application state.

pub mod auth;

pub use auth::{AuthStore, Session, SubscriptionId, STORAGE_KEY};

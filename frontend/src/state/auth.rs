//! # Auth Store
//!
//! Client-side authentication state with the bearer token mirrored to durable
//! storage.
//!
//! ## Lifecycle
//!
//! ```text
//!   start ──initialize()──► token in storage? ──yes──► { token, is_loading: true }
//!                                    │                        │
//!                                    no                caller verifies via /api/auth/me
//!                                    ▼                        │
//!                              empty session  ◄──clear────────┤
//!                                    │                        │
//!                                    └──set_authenticated────►{ user, token, is_authenticated }
//! ```
//!
//! Only the token is persisted; the user profile is re-fetched after every
//! restart. A persisted token alone never makes the session authenticated.
//!
//! ## Subscriptions
//!
//! Subscribers receive the current [`Session`] immediately, then every update
//! in the order transitions are applied. A subscriber may call back into the
//! store; the nested update is queued and delivered after the current one has
//! reached every subscriber.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use shared::User;

use crate::storage::KeyValueStorage;

/// Storage key holding the bearer token.
pub const STORAGE_KEY: &str = "auth_token";

/// The client's current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// A stored token is waiting for backend verification
    pub is_loading: bool,
}

impl Session {
    /// Session rebuilt from a persisted token: pending verification, not authenticated.
    fn restored(token: Option<String>) -> Self {
        let is_loading = token.is_some();
        Self {
            user: None,
            token,
            is_authenticated: false,
            is_loading,
        }
    }
}

/// Handle returned by [`AuthStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&Session) + Send + Sync>;

/// Owner of the in-memory [`Session`].
///
/// Construct one per process and share it (`Arc<AuthStore>`) with the API
/// client and the UI. Operations never fail: storage errors are logged and
/// the in-memory transition is still applied.
pub struct AuthStore {
    storage: Option<Arc<dyn KeyValueStorage>>,
    session: RwLock<Session>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
    // each snapshot carries the subscribers registered when it was published
    pending: Mutex<VecDeque<(Vec<Subscriber>, Session)>>,
    delivering: AtomicBool,
}

/// Clears the delivering flag even if a subscriber unwinds.
struct DeliveryGuard<'a>(&'a AtomicBool);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AuthStore {
    /// Store backed by durable storage; the persisted token is loaded immediately.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::build(Some(storage))
    }

    /// Store for contexts without durable storage (e.g. server-side rendering).
    /// [`get_token`](Self::get_token) always returns `None`.
    pub fn without_storage() -> Self {
        Self::build(None)
    }

    fn build(storage: Option<Arc<dyn KeyValueStorage>>) -> Self {
        let store = Self {
            storage,
            session: RwLock::new(Session::default()),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            pending: Mutex::new(VecDeque::new()),
            delivering: AtomicBool::new(false),
        };
        *store.session.write() = Session::restored(store.get_token());
        store
    }

    /// Reload the session from durable storage.
    ///
    /// With a stored token the session becomes `{ token, is_loading: true }`
    /// and the caller is expected to verify it; otherwise it is empty.
    pub fn initialize(&self) {
        let token = self.get_token();
        tracing::debug!(has_token = token.is_some(), "Initializing auth session");
        self.replace(Session::restored(token));
    }

    /// Persist `token` and replace the session with an authenticated one.
    pub fn set_authenticated(&self, user: User, token: String) {
        self.persist(Some(&token));
        tracing::info!(user_id = %user.id, "Session authenticated");
        self.replace(Session {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            is_loading: false,
        });
    }

    /// Remove the persisted token and reset to the empty session. Idempotent.
    pub fn clear_authenticated(&self) {
        self.persist(None);
        tracing::info!("Session cleared");
        self.replace(Session::default());
    }

    /// Update only the loading flag.
    pub fn set_loading(&self, is_loading: bool) {
        let snapshot = {
            let mut session = self.session.write();
            session.is_loading = is_loading;
            session.clone()
        };
        self.publish(snapshot);
    }

    /// Token currently in durable storage.
    ///
    /// Reads storage rather than the in-memory session so a request issued
    /// before initialization completes still carries the right credential.
    pub fn get_token(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get(STORAGE_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token from storage");
                None
            }
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().user.clone()
    }

    /// Register `callback`; it is invoked right away with the current session.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Subscriber = Arc::new(callback);
        self.subscribers.lock().push((id, callback.clone()));

        let current = self.session();
        callback(&current);
        id
    }

    /// Stop delivering updates to a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn persist(&self, token: Option<&str>) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set(STORAGE_KEY, token) {
            tracing::warn!(error = %e, "Failed to persist auth token");
        }
    }

    fn replace(&self, next: Session) {
        *self.session.write() = next.clone();
        self.publish(next);
    }

    fn publish(&self, snapshot: Session) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        self.pending.lock().push_back((subscribers, snapshot));
        if self.delivering.swap(true, Ordering::AcqRel) {
            // an outer publish is draining the queue
            return;
        }

        loop {
            {
                let _guard = DeliveryGuard(&self.delivering);
                loop {
                    let next = self.pending.lock().pop_front();
                    let Some((subscribers, snapshot)) = next else {
                        break;
                    };
                    for callback in subscribers {
                        callback(&snapshot);
                    }
                }
            }

            let more = !self.pending.lock().is_empty();
            if !more || self.delivering.swap(true, Ordering::AcqRel) {
                break;
            }
        }
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("has_storage", &self.storage.is_some())
            .field("session", &*self.session.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is this visitor signed in, and as whom". The
//! route guard, navbar, and pages read it through [`use_session`]; only the
//! login page and the logout action mutate it.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is plain data plus a storage backend so its behavior can
//! be tested without a reactive runtime. [`SessionContext`] wraps it for
//! Leptos: the store lives in a `StoredValue` and every mutation republishes
//! a fresh [`SessionSnapshot`] through one signal, only after the store has
//! finished updating both storage and memory.
//!
//! TRADE-OFFS
//! ==========
//! The persisted entries are a cache of the last accepted login, not a
//! credential. Nothing here verifies them; the backend remains the authority.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::{AUTH_FLAG_KEY, AUTH_FLAG_VALUE, PROFILE_KEY};
use crate::net::types::User;
use crate::util::storage::{KeyValueStorage, StorageError};

/// Why persisted session data was discarded during [`SessionStore::initialize`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session flag set but no stored profile")]
    MissingProfile,
    #[error("stored profile is malformed: {0}")]
    MalformedProfile(#[from] serde_json::Error),
    #[error("stored profile has invalid id {id}")]
    InvalidProfile { id: i64 },
}

/// Read-only view of the session handed to components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub profile: Option<User>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl SessionSnapshot {
    /// State before [`SessionStore::initialize`] has run.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }
}

/// Owns the in-memory session and mirrors it into client storage.
pub struct SessionStore {
    storage: Box<dyn KeyValueStorage>,
    profile: Option<User>,
    loading: bool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("profile", &self.profile)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self { storage: Box::new(storage), profile: None, loading: true }
    }

    /// Restore the persisted session. Only the first call reads storage.
    pub fn initialize(&mut self) {
        if !self.loading {
            log::debug!("session already initialized");
            return;
        }
        self.profile = match restore_profile(self.storage.as_ref()) {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                None
            }
        };
        self.loading = false;
        if let Some(user) = &self.profile {
            log::info!("restored session for user {}", user.id);
        }
    }

    /// Start a session for a profile the backend just accepted.
    ///
    /// Storage failures are logged and ignored: the in-memory session stays
    /// authoritative for this page load. Profiles without a usable id are
    /// refused so an authenticated session always has an identity.
    pub fn login(&mut self, user: User) {
        if !user.has_valid_id() {
            log::warn!("refusing to start session for profile with id {}", user.id);
            return;
        }
        if let Err(e) = self.persist(&user) {
            log::warn!("session not persisted: {e}");
        }
        log::info!("session started for user {}", user.id);
        self.profile = Some(user);
        self.loading = false;
    }

    /// End the session. Calling this while signed out is a no-op.
    pub fn logout(&mut self) {
        for key in [AUTH_FLAG_KEY, PROFILE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("failed to clear `{key}`: {e}");
            }
        }
        if let Some(user) = self.profile.take() {
            log::info!("session ended for user {}", user.id);
        }
        self.loading = false;
    }

    pub fn read(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.profile.is_some(),
            profile: self.profile.clone(),
            loading: self.loading,
        }
    }

    // Profile first: if the flag write fails, the next load sees no flag and
    // stays signed out rather than trusting a flag with no profile.
    fn persist(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Write {
            key: PROFILE_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        self.storage.set(PROFILE_KEY, &raw)?;
        self.storage.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE)
    }
}

fn restore_profile(storage: &dyn KeyValueStorage) -> Result<Option<User>, SessionError> {
    if storage.get(AUTH_FLAG_KEY).as_deref() != Some(AUTH_FLAG_VALUE) {
        return Ok(None);
    }
    let raw = storage.get(PROFILE_KEY).ok_or(SessionError::MissingProfile)?;
    let user: User = serde_json::from_str(&raw)?;
    if !user.has_valid_id() {
        return Err(SessionError::InvalidProfile { id: user.id });
    }
    Ok(Some(user))
}

/// Reactive handle to the session, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    snapshot: RwSignal<SessionSnapshot>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let snapshot = RwSignal::new(store.read());
        Self { snapshot, store: StoredValue::new(store) }
    }

    /// Current snapshot; subscribes the calling reactive scope.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.get()
    }

    pub fn snapshot_untracked(&self) -> SessionSnapshot {
        self.snapshot.get_untracked()
    }

    pub fn initialize(&self) {
        self.apply(SessionStore::initialize);
    }

    pub fn login(&self, user: User) {
        self.apply(move |store| store.login(user));
    }

    pub fn logout(&self) {
        self.apply(SessionStore::logout);
    }

    fn apply(&self, mutate: impl FnOnce(&mut SessionStore)) {
        let next = self.store.try_update_value(|store| {
            mutate(store);
            store.read()
        });
        if let Some(next) = next {
            self.snapshot.set(next);
        }
    }
}

/// Create the session handle and provide it to all descendants.
pub fn provide_session(store: SessionStore) -> SessionContext {
    let session = SessionContext::new(store);
    provide_context(session);
    session
}

/// Access the session from any component below [`provide_session`].
///
/// # Panics
///
/// Panics when called outside the provider; that is a wiring bug, not a
/// runtime condition.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

//! Route-guard state machine for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `RouteGuard` component feeds every session snapshot into a
//! [`GuardTracker`], which turns the change into a [`SessionEvent`] and moves
//! the [`GuardState`] along. Waiting while the session loads avoids flashing
//! the login page on reload.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::LOGIN_PATH;
use crate::state::session::SessionSnapshot;

/// Whether protected views may render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Session not yet restored; render a waiting indicator only.
    #[default]
    Pending,
    /// Session restored and signed out; redirect to the login page.
    Denied,
    /// Signed in; render the requested view unmodified.
    Permitted,
}

/// Session changes the guard reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Initialized { authenticated: bool },
    LoggedIn,
    LoggedOut,
}

impl GuardState {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        if snapshot.loading {
            Self::Pending
        } else if snapshot.authenticated {
            Self::Permitted
        } else {
            Self::Denied
        }
    }

    /// Apply one session event. Events that do not apply to the current state
    /// leave it unchanged.
    ///
    /// A login or logout while still pending resolves the guard, matching the
    /// store, which stops loading on either mutation.
    #[must_use]
    pub fn transition(self, event: SessionEvent) -> Self {
        match (self, event) {
            (Self::Pending, SessionEvent::Initialized { authenticated: true })
            | (Self::Pending | Self::Denied, SessionEvent::LoggedIn) => Self::Permitted,
            (Self::Pending, SessionEvent::Initialized { authenticated: false })
            | (Self::Pending | Self::Permitted, SessionEvent::LoggedOut) => Self::Denied,
            (state, _) => state,
        }
    }

    /// Where navigation to a protected view should go instead, if anywhere.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Denied => Some(LOGIN_PATH),
            Self::Pending | Self::Permitted => None,
        }
    }
}

impl SessionEvent {
    /// The event that moved the session from `prev` to `next`, if any.
    pub fn between(prev: &SessionSnapshot, next: &SessionSnapshot) -> Option<Self> {
        if prev.loading && !next.loading && prev.authenticated == next.authenticated {
            return Some(Self::Initialized { authenticated: next.authenticated });
        }
        match (prev.authenticated, next.authenticated) {
            (false, true) => Some(Self::LoggedIn),
            (true, false) => Some(Self::LoggedOut),
            _ => None,
        }
    }
}

/// Guard state advanced by the events between successive session snapshots.
#[derive(Clone, Debug)]
pub struct GuardTracker {
    state: GuardState,
    last: SessionSnapshot,
}

impl GuardTracker {
    /// Start from whatever the session looks like when the guard mounts; a
    /// guard mounted after login starts out permitted.
    pub fn new(initial: &SessionSnapshot) -> Self {
        Self { state: GuardState::from_snapshot(initial), last: initial.clone() }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Apply the event between the last seen snapshot and `next`.
    pub fn advance(&mut self, next: SessionSnapshot) -> GuardState {
        if let Some(event) = SessionEvent::between(&self.last, &next) {
            let state = self.state.transition(event);
            log::debug!("route guard {event:?}: {:?} -> {state:?}", self.state);
            self.state = state;
        }
        self.last = next;
        self.state
    }
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::PortalError;
use crate::models::Role;

/// Session
///
/// The single piece of mutable state in the system: one role field per
/// session, plus a creation timestamp for reporting. A session starts
/// unauthenticated and is mutated only through `login` and `logout`; nothing
/// is persisted past the session's end.
///
/// Sessions are explicitly owned objects handed out by the `SessionStore`;
/// there is no ambient process-wide "current role".
#[derive(Debug, Clone)]
pub struct Session {
    current_role: Role,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session in the `Unauthenticated` state.
    pub fn new() -> Self {
        Self {
            current_role: Role::Unauthenticated,
            created_at: Utc::now(),
        }
    }

    /// Sets the current role. Any registry member may be set, including the
    /// `Unauthenticated` sentinel; re-login without an intermediate logout
    /// simply overwrites the previous role.
    pub fn login(&mut self, role: Role) {
        self.current_role = role;
    }

    /// Resets the role to `Unauthenticated`. Idempotent: logging out an
    /// already-unauthenticated session leaves state unchanged.
    pub fn logout(&mut self) {
        self.current_role = Role::Unauthenticated;
    }

    /// Pure read of the current role.
    pub fn current_role(&self) -> Role {
        self.current_role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// SessionStore
///
/// Owns every live session, keyed by UUID. The `RwLock` serializes all
/// reads and writes of each session's role field, so concurrent requests
/// against the same session never observe a torn update. The store holds no
/// backing storage: ending a session (or the process) discards its state.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

/// SessionState
///
/// Thread-safe shared handle to the session store, injected into the
/// application state: cloned per request, shared underneath.
pub type SessionState = Arc<SessionStore>;

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a fresh unauthenticated session and returns its UUID together
    /// with the creation timestamp.
    pub fn create(&self) -> (Uuid, DateTime<Utc>) {
        let id = Uuid::new_v4();
        let session = Session::new();
        let created_at = session.created_at();
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(id, session);
        (id, created_at)
    }

    /// Applies `Login(role)` to the addressed session.
    pub fn login(&self, id: Uuid, role: Role) -> Result<(), PortalError> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or(PortalError::SessionNotFound(id))?;
        session.login(role);
        Ok(())
    }

    /// Applies `Logout()` to the addressed session.
    pub fn logout(&self, id: Uuid) -> Result<(), PortalError> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or(PortalError::SessionNotFound(id))?;
        session.logout();
        Ok(())
    }

    /// Reads the addressed session's current role.
    pub fn current_role(&self, id: Uuid) -> Result<Role, PortalError> {
        self.status(id).map(|(role, _)| role)
    }

    /// Reads the addressed session's role and creation time in one take of
    /// the lock.
    pub fn status(&self, id: Uuid) -> Result<(Role, DateTime<Utc>), PortalError> {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        let session = sessions.get(&id).ok_or(PortalError::SessionNotFound(id))?;
        Ok((session.current_role(), session.created_at()))
    }

    /// Destroys the addressed session. Its state is gone: a subsequent
    /// operation on the same UUID fails with `SessionNotFound`.
    pub fn end(&self, id: Uuid) -> Result<(), PortalError> {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(PortalError::SessionNotFound(id))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

use analytics_portal::error::PortalError;
use analytics_portal::models::Role;
use analytics_portal::session::{Session, SessionStore};
use uuid::Uuid;

// --- Session object ---

#[test]
fn new_session_is_unauthenticated() {
    let session = Session::new();
    assert_eq!(session.current_role(), Role::Unauthenticated);
}

#[test]
fn login_sets_the_role() {
    let mut session = Session::new();
    session.login(Role::Professor);
    assert_eq!(session.current_role(), Role::Professor);
}

#[test]
fn relogin_overwrites_without_logout() {
    let mut session = Session::new();
    session.login(Role::Admin);
    session.login(Role::Pc);
    assert_eq!(session.current_role(), Role::Pc);
}

#[test]
fn login_accepts_the_unauthenticated_sentinel() {
    // Any registry member may be set, including the sentinel itself.
    let mut session = Session::new();
    session.login(Role::Admin);
    session.login(Role::Unauthenticated);
    assert_eq!(session.current_role(), Role::Unauthenticated);
}

#[test]
fn logout_is_idempotent() {
    let mut session = Session::new();
    session.login(Role::Team);

    session.logout();
    let after_one = session.current_role();
    session.logout();
    let after_two = session.current_role();

    assert_eq!(after_one, Role::Unauthenticated);
    assert_eq!(after_one, after_two);
}

#[test]
fn login_logout_round_trip() {
    let mut session = Session::new();
    session.login(Role::Admin);
    session.logout();
    assert_eq!(session.current_role(), Role::Unauthenticated);
}

// --- Session store ---

#[test]
fn store_creates_unauthenticated_sessions() {
    let store = SessionStore::new();
    let (id, created_at) = store.create();

    let (role, status_created_at) = store.status(id).expect("session exists");
    assert_eq!(role, Role::Unauthenticated);
    assert_eq!(created_at, status_created_at);
}

#[test]
fn store_login_logout_round_trip() {
    let store = SessionStore::new();
    let (id, _) = store.create();

    store.login(id, Role::Admin).expect("login");
    assert_eq!(store.current_role(id).expect("read"), Role::Admin);

    store.logout(id).expect("logout");
    assert_eq!(
        store.current_role(id).expect("read"),
        Role::Unauthenticated
    );
}

#[test]
fn store_sessions_are_independent() {
    let store = SessionStore::new();
    let (first, _) = store.create();
    let (second, _) = store.create();

    store.login(first, Role::DecisionMaker).expect("login");

    assert_eq!(
        store.current_role(first).expect("read"),
        Role::DecisionMaker
    );
    assert_eq!(
        store.current_role(second).expect("read"),
        Role::Unauthenticated
    );
}

#[test]
fn unknown_session_ids_fail_uniformly() {
    let store = SessionStore::new();
    let ghost = Uuid::new_v4();

    assert!(matches!(
        store.current_role(ghost),
        Err(PortalError::SessionNotFound(id)) if id == ghost
    ));
    assert!(matches!(
        store.login(ghost, Role::Admin),
        Err(PortalError::SessionNotFound(_))
    ));
    assert!(matches!(
        store.logout(ghost),
        Err(PortalError::SessionNotFound(_))
    ));
    assert!(matches!(
        store.end(ghost),
        Err(PortalError::SessionNotFound(_))
    ));
}

#[test]
fn ended_sessions_leave_no_state_behind() {
    let store = SessionStore::new();
    let (id, _) = store.create();
    store.login(id, Role::Team).expect("login");

    store.end(id).expect("end");

    assert!(matches!(
        store.current_role(id),
        Err(PortalError::SessionNotFound(_))
    ));
    // Ending twice is not idempotent: the second call addresses a session
    // that no longer exists.
    assert!(matches!(
        store.end(id),
        Err(PortalError::SessionNotFound(_))
    ));
}

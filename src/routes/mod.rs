/// Router Module Index
///
/// Organizes the application's routing into two scopes that mirror the two
/// kinds of state a client can hold: none at all, or a session UUID.
/// Role-based gating does not happen at the router: the resolver applies
/// the access policy per request, so a session whose role changes sees the
/// new navigation on its very next call.

/// Routes that need no session: health, the role registry, the static
/// section catalog, and session creation itself.
pub mod public;

/// Routes addressed to one live session by UUID: login, logout, status,
/// navigation resolution, and session teardown.
pub mod session;

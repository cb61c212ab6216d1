use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::PortalError;

// --- Core Domain Types ---

/// Role
///
/// The closed registry of identity classifications driving every access
/// decision. `Unauthenticated` is the sentinel a fresh session starts in and
/// the state `logout` returns to. There is no hierarchy between roles:
/// Professor, Team, and Admin are policy-equivalent by explicit enumeration
/// in `policy::grants`, not by inheritance.
///
/// Wire tokens match the role strings of the original portal UI
/// ("PC", "Decision Maker", ...), so clients exchange the same labels a user
/// would pick from the login selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS, ToSchema,
    Default,
)]
#[ts(export)]
pub enum Role {
    #[default]
    Unauthenticated,
    #[serde(rename = "PC")]
    Pc,
    Professor,
    Team,
    Admin,
    #[serde(rename = "Decision Maker")]
    DecisionMaker,
    Citizen,
}

impl Role {
    /// The full closed registry, in declaration order.
    pub const REGISTRY: [Role; 7] = [
        Role::Unauthenticated,
        Role::Pc,
        Role::Professor,
        Role::Team,
        Role::Admin,
        Role::DecisionMaker,
        Role::Citizen,
    ];

    /// Parses a raw wire token into a registry member.
    ///
    /// This is the only place `InvalidRole` can originate: callers holding a
    /// typed `Role` are past the validation boundary and every downstream
    /// operation on it is total.
    pub fn parse(token: &str) -> Result<Role, PortalError> {
        match token {
            "Unauthenticated" => Ok(Role::Unauthenticated),
            "PC" => Ok(Role::Pc),
            "Professor" => Ok(Role::Professor),
            "Team" => Ok(Role::Team),
            "Admin" => Ok(Role::Admin),
            "Decision Maker" => Ok(Role::DecisionMaker),
            "Citizen" => Ok(Role::Citizen),
            other => Err(PortalError::InvalidRole(other.to_string())),
        }
    }

    /// The wire token for this role, inverse of `parse`.
    pub const fn as_token(&self) -> &'static str {
        match self {
            Role::Unauthenticated => "Unauthenticated",
            Role::Pc => "PC",
            Role::Professor => "Professor",
            Role::Team => "Team",
            Role::Admin => "Admin",
            Role::DecisionMaker => "Decision Maker",
            Role::Citizen => "Citizen",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

/// SectionName
///
/// The closed set of named functional areas of the portal. Sections are
/// static: declared once at startup inside `SectionCatalog::standard` and
/// never mutated at runtime. `Account` is special-cased by the resolver (it
/// is appended to every non-empty navigation result rather than gated by the
/// policy table).
///
/// `Ord` exists so the access policy can return sections as an ordered set
/// keyed on membership alone, independent of catalog declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS, ToSchema,
)]
#[ts(export)]
pub enum SectionName {
    #[serde(rename = "EDA")]
    Eda,
    Visualization,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    Account,
}

impl SectionName {
    /// The human-readable group label, also used as the JSON group name.
    pub const fn label(&self) -> &'static str {
        match self {
            SectionName::Eda => "EDA",
            SectionName::Visualization => "Visualization",
            SectionName::MachineLearning => "Machine Learning",
            SectionName::Account => "Account",
        }
    }
}

/// PageHandle
///
/// An opaque reference to externally-owned renderable content: a title, an
/// icon token, and a callback identifier the presentation layer dispatches
/// on. The core carries handles forward verbatim and never inspects or
/// executes what they point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PageHandle {
    pub title: String,
    pub icon: String,
    pub callback: String,
}

impl PageHandle {
    pub fn new(title: &str, icon: &str, callback: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            callback: callback.to_string(),
        }
    }
}

// --- Navigation Output (derived, never stored) ---

/// NavigationGroup
///
/// One ordered group of page handles under a display name, as it appears in
/// the resolved navigation structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NavigationGroup {
    pub name: String,
    pub pages: Vec<PageHandle>,
}

/// NavigationResult
///
/// The ready-to-render output of a resolution call: ordered groups of page
/// handles plus an optional designated default entry point. Recomputed on
/// every call and treated as immutable output: it is never cached or stored.
/// `PartialEq` lets callers (and tests) compare repeated resolutions for
/// exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NavigationResult {
    /// Ordered group mapping. Either the Account group followed by the
    /// accessible sections in catalog declaration order, or a single Login
    /// group when no section is accessible.
    pub groups: Vec<NavigationGroup>,
    /// The page whose default predicate matched the current role, if any.
    /// `None` leaves the choice to the navigation front-end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page: Option<PageHandle>,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /sessions/{id}/login. The role arrives as a raw
/// wire token and is parsed against the registry; out-of-registry tokens are
/// rejected with 422 before they can reach the session state.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub role: String,
}

// --- Response Schemas (Output) ---

/// SessionStatus
///
/// Output schema describing a live session: its UUID, the role it currently
/// holds, and when it was created. Returned by session creation and by every
/// state-changing session endpoint so clients always see the post-transition
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionStatus {
    pub session_id: Uuid,
    pub role: Role,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// RoleInfo
///
/// Output schema for the role registry listing (GET /roles): the wire token
/// together with the sections the access policy grants that role. This is
/// the policy table made inspectable, useful for login selectors and for
/// front-ends that grey out unreachable sections.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RoleInfo {
    pub token: String,
    pub accessible_sections: Vec<SectionName>,
}

/// SectionInfo
///
/// Output schema for the section catalog listing (GET /sections): the static
/// declaration of one section and its page handles, in declared order.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SectionInfo {
    pub name: SectionName,
    pub label: String,
    pub pages: Vec<PageHandle>,
}

use std::collections::BTreeSet;

use crate::models::{Role, SectionName};

/// Access Policy
///
/// The static role-to-sections permission table, expressed as an exhaustive
/// match over both closed enums so the compiler proves the mapping is total:
/// adding a role or section without deciding its policy is a build error,
/// not a silent empty entry.
///
/// All functions here are pure and deterministic. The table is fixed at
/// compile time and shared read-only by every session.

/// The sections whose visibility is decided by the policy table. Account is
/// deliberately absent: the resolver appends it to every non-empty result.
pub const GATED_SECTIONS: [SectionName; 3] = [
    SectionName::Eda,
    SectionName::Visualization,
    SectionName::MachineLearning,
];

/// grants
///
/// Whether `role` may access `section`. Total over the Role registry: the
/// unauthenticated sentinel simply matches no gated arm, yielding `false`
/// for everything except Account.
pub const fn grants(role: Role, section: SectionName) -> bool {
    match section {
        SectionName::Eda | SectionName::MachineLearning => {
            matches!(role, Role::Professor | Role::Team | Role::Admin)
        }
        SectionName::Visualization => matches!(
            role,
            Role::Professor | Role::Team | Role::Pc | Role::DecisionMaker | Role::Admin
        ),
        // Settings and logout are reachable by anyone who already has a
        // navigable portal; the empty-access fallback is the resolver's
        // decision, not the policy's.
        SectionName::Account => true,
    }
}

/// accessible
///
/// The subset of gated sections `role` may reach, as an ordered set.
/// Set-valued on purpose: only membership is observable, so the answer is
/// identical no matter what order sections were declared in the catalog.
pub fn accessible(role: Role) -> BTreeSet<SectionName> {
    GATED_SECTIONS
        .iter()
        .copied()
        .filter(|&section| grants(role, section))
        .collect()
}

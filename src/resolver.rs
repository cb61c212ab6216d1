use crate::catalog::SectionCatalog;
use crate::models::{NavigationGroup, NavigationResult, Role, SectionName};
use crate::policy;

/// Navigation Resolver
///
/// Composes the access policy with the static section catalog into a
/// concrete, ready-to-render navigation structure for one role. Resolution
/// is a pure function of `(role, catalog)` with no I/O and no dependence on
/// session history; callers re-run it after every role transition.

/// resolve
///
/// Builds the `NavigationResult` for `role`:
///
/// 1. When at least one gated section is accessible, the result opens with
///    the fixed Account group (Settings, Logout) followed by one group per
///    accessible section, in catalog declaration order, each carrying its
///    declared page handles in order.
/// 2. The default page is the earliest-declared page (scanning emitted
///    groups in order) whose default predicate holds for `role`; when no
///    predicate holds, `default_page` stays `None` and the front-end picks
///    its own implicit first entry.
/// 3. When nothing is accessible, the result collapses to a single Login
///    group. The Account group is NOT included on this branch: an
///    unprivileged role cannot reach Settings or Logout without logging in
///    first.
pub fn resolve(role: Role, catalog: &SectionCatalog) -> NavigationResult {
    let accessible = policy::accessible(role);

    if accessible.is_empty() {
        return NavigationResult {
            groups: vec![NavigationGroup {
                name: "Login".to_string(),
                pages: vec![catalog.login_page().clone()],
            }],
            default_page: None,
        };
    }

    let mut groups = Vec::with_capacity(accessible.len() + 1);
    groups.push(NavigationGroup {
        name: SectionName::Account.label().to_string(),
        pages: catalog.account_pages().to_vec(),
    });

    // Account pages carry no default predicates, so the scan effectively
    // starts with the first accessible catalog section.
    let mut default_page = None;

    for section in catalog.sections() {
        if !accessible.contains(&section.name) {
            continue;
        }
        let mut pages = Vec::with_capacity(section.pages.len());
        for entry in &section.pages {
            if default_page.is_none() && (entry.default_when)(role) {
                default_page = Some(entry.handle.clone());
            }
            pages.push(entry.handle.clone());
        }
        groups.push(NavigationGroup {
            name: section.name.label().to_string(),
            pages,
        });
    }

    NavigationResult {
        groups,
        default_page,
    }
}

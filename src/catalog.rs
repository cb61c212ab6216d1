use std::sync::Arc;

use crate::models::{PageHandle, Role, SectionName};

/// DefaultPredicate
///
/// Decides, given the role in effect at resolution time, whether a page is
/// the navigation's default entry point. Predicates are plain function
/// pointers evaluated lazily inside `resolver::resolve`: defaults are never
/// computed at catalog construction, where the role is not yet known.
pub type DefaultPredicate = fn(Role) -> bool;

/// PageEntry
///
/// A declared page: the opaque handle the core carries forward, paired with
/// its default-selection predicate.
pub struct PageEntry {
    pub handle: PageHandle,
    pub default_when: DefaultPredicate,
}

/// Section
///
/// One named functional area and its ordered page declarations.
pub struct Section {
    pub name: SectionName,
    pub pages: Vec<PageEntry>,
}

/// SectionCatalog
///
/// The static catalog of gated sections plus the fixed handles that live
/// outside the policy table: the Account pages appended to every non-empty
/// navigation, and the Login page substituted when nothing is accessible.
/// Built once at startup and shared read-only across all sessions.
pub struct SectionCatalog {
    sections: Vec<Section>,
    account_pages: Vec<PageHandle>,
    login_page: PageHandle,
}

/// CatalogState
///
/// Thread-safe shared handle to the immutable catalog, injected into the
/// application state alongside the session store.
pub type CatalogState = Arc<SectionCatalog>;

impl SectionCatalog {
    /// Builds a catalog from explicit declarations. The standard portal
    /// catalog comes from [`SectionCatalog::standard`]; this constructor
    /// exists for callers supplying their own section layout.
    pub fn new(
        sections: Vec<Section>,
        account_pages: Vec<PageHandle>,
        login_page: PageHandle,
    ) -> Self {
        Self {
            sections,
            account_pages,
            login_page,
        }
    }

    /// standard
    ///
    /// The portal's canonical catalog. Declaration order is EDA,
    /// Visualization, Machine Learning: the order groups appear in the
    /// resolved navigation (after Account). Titles, icon tokens, and
    /// callback identifiers mirror the pages of the analytics portal UI;
    /// the core treats all of them as inert data.
    pub fn standard() -> Self {
        Self {
            sections: vec![
                Section {
                    name: SectionName::Eda,
                    pages: vec![PageEntry {
                        handle: PageHandle::new(
                            "Exploratory Data Analysis",
                            ":material/insights:",
                            "eda",
                        ),
                        default_when: |role| role == Role::Admin,
                    }],
                },
                Section {
                    name: SectionName::Visualization,
                    pages: vec![
                        PageEntry {
                            handle: PageHandle::new("Dashboard", ":material/monitoring:", "dashboard"),
                            default_when: |role| role == Role::DecisionMaker,
                        },
                        PageEntry {
                            handle: PageHandle::new("Maps", ":material/map:", "maps"),
                            default_when: |role| role == Role::Citizen,
                        },
                        PageEntry {
                            handle: PageHandle::new("Other maps", ":material/public:", "maps2"),
                            default_when: |role| role == Role::Citizen,
                        },
                    ],
                },
                Section {
                    name: SectionName::MachineLearning,
                    pages: vec![PageEntry {
                        handle: PageHandle::new(
                            "Machine Learning",
                            ":material/neurology:",
                            "ml_analysis",
                        ),
                        default_when: |role| role == Role::Admin,
                    }],
                },
            ],
            // Fixed Account group contents: Settings first, then Logout.
            account_pages: vec![
                PageHandle::new("Settings", ":material/settings:", "settings"),
                PageHandle::new("Log out", ":material/logout:", "logout"),
            ],
            login_page: PageHandle::new("Login", ":material/login:", "login"),
        }
    }

    /// The gated sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The fixed Account group pages (Settings, Logout).
    pub fn account_pages(&self) -> &[PageHandle] {
        &self.account_pages
    }

    /// The sole destination of the empty-access fallback.
    pub fn login_page(&self) -> &PageHandle {
        &self.login_page
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

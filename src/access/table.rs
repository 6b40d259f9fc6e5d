//! Role → permission → route mapping.
//!
//! DESIGN
//! ======
//! The mapping is data (`permissions.json`, embedded at build time), not code
//! branches, so adding a role or route is a data change. The table is
//! immutable once loaded; all lookups are pure.
//!
//! Unmapped paths are fail-open: a route is reachable until a permission is
//! attached to it. Unknown roles get no permissions and only the default
//! route.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

use super::roles::Role;

const BUILTIN_TABLE: &str = include_str!("permissions.json");

/// Paths every role, known or not, may open.
pub const ALWAYS_ALLOWED_PATHS: &[&str] = &["/", "/dashboard"];

/// Navigable route: where it lives and what it needs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RouteSpec {
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub permission: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
struct RoleGrants {
    #[serde(default)]
    permissions: BTreeSet<String>,
    #[serde(default)]
    routes: Vec<String>,
}

/// Send users who cannot open `path` to `fallback` instead of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct RedirectRule {
    path: String,
    fallback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionTable {
    dashboard_path: String,
    default_route: String,
    #[serde(default)]
    routes: BTreeMap<String, RouteSpec>,
    #[serde(default)]
    roles: HashMap<Role, RoleGrants>,
    #[serde(default)]
    redirects: Vec<RedirectRule>,
}

impl Default for PermissionTable {
    /// Deny-all table: no role holds any permission.
    fn default() -> Self {
        Self {
            dashboard_path: "/".to_owned(),
            default_route: "dashboard".to_owned(),
            routes: BTreeMap::new(),
            roles: HashMap::new(),
            redirects: Vec::new(),
        }
    }
}

impl PermissionTable {
    /// Parse a table from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document does not match.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The table shipped with the bundle.
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<PermissionTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            Self::from_json(BUILTIN_TABLE).unwrap_or_else(|e| {
                log::error!("embedded permission table is invalid, denying all: {e}");
                Self::default()
            })
        })
    }

    pub fn dashboard_path(&self) -> &str {
        &self.dashboard_path
    }

    pub fn has_permission(&self, role: Option<Role>, permission: &str) -> bool {
        role.and_then(|r| self.roles.get(&r))
            .is_some_and(|grants| grants.permissions.contains(permission))
    }

    /// Route ids `role` may navigate to, in display order.
    pub fn permitted_routes(&self, role: Option<Role>) -> Vec<&str> {
        match role.and_then(|r| self.roles.get(&r)) {
            Some(grants) => grants.routes.iter().map(String::as_str).collect(),
            None => vec![self.default_route.as_str()],
        }
    }

    pub fn route(&self, id: &str) -> Option<&RouteSpec> {
        self.routes.get(id)
    }

    /// Permission guarding `path`, taken from the closest mapped ancestor
    /// (`/journeys/42` inherits `/journeys`).
    pub fn required_permission(&self, path: &str) -> Option<&str> {
        let mut candidate = normalize_path(path);
        loop {
            let found = self
                .routes
                .values()
                .find(|spec| spec.path == candidate)
                .and_then(|spec| spec.permission.as_deref());
            if found.is_some() {
                return found;
            }
            match candidate.rfind('/') {
                Some(0) | None => return None,
                Some(idx) => candidate.truncate(idx),
            }
        }
    }

    pub fn can_access_route(&self, role: Option<Role>, path: &str) -> bool {
        let path = normalize_path(path);
        if ALWAYS_ALLOWED_PATHS.contains(&path.as_str()) {
            return true;
        }
        match self.required_permission(&path) {
            None => true,
            Some(permission) => self.has_permission(role, permission),
        }
    }

    /// Where to send `role` when it asked for `requested_path`: the
    /// designated fallback of the path or its closest ancestor with one, if
    /// the role cannot open the path, otherwise the dashboard.
    pub fn redirect_target(&self, role: Option<Role>, requested_path: &str) -> &str {
        let path = normalize_path(requested_path);
        if self.can_access_route(role, &path) {
            return &self.dashboard_path;
        }
        self.redirects
            .iter()
            .filter(|rule| is_same_or_descendant(&path, &rule.path))
            .max_by_key(|rule| rule.path.len())
            .map_or(self.dashboard_path.as_str(), |rule| rule.fallback.as_str())
    }
}

fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Strip query, fragment and trailing slash; empty becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}

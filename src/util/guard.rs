//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so the decision
//! is a pure function of the session, the permission table and the location.
//! `components::guard` turns the decision into rendering and navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::access::PermissionTable;
use crate::state::session::{SessionState, SessionStatus};

use super::navigation::LOGIN_PATH;

/// Query parameter carrying the location to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still running; show a placeholder, decide nothing.
    Pending,
    Render,
    Redirect(String),
}

/// Decide what a protected view does for the current session.
///
/// With no `required_permission` any signed-in user may render. With one, the
/// role must reach the current path or hold the permission; otherwise it is
/// sent to the path's redirect target.
pub fn protected_route_decision(
    state: &SessionState,
    table: &PermissionTable,
    current_path: &str,
    required_permission: Option<&str>,
) -> GuardDecision {
    match state.status() {
        SessionStatus::Loading => GuardDecision::Pending,
        SessionStatus::Unauthenticated => GuardDecision::Redirect(login_redirect_path(current_path)),
        SessionStatus::Authenticated => {
            let Some(permission) = required_permission else {
                return GuardDecision::Render;
            };
            let role = state.user_details().and_then(|details| details.role);
            if table.can_access_route(role, current_path) || table.has_permission(role, permission) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(table.redirect_target(role, current_path).to_owned())
            }
        }
    }
}

/// Decide what a signed-out-only view (login, password reset) does.
///
/// Signed-in users go to the remembered `redirect` location when it is a
/// valid local path, otherwise to the dashboard.
pub fn public_only_decision(
    state: &SessionState,
    table: &PermissionTable,
    redirect_param: Option<&str>,
) -> GuardDecision {
    match state.status() {
        SessionStatus::Loading => GuardDecision::Pending,
        SessionStatus::Authenticated => GuardDecision::Redirect(
            post_login_target(redirect_param).unwrap_or_else(|| table.dashboard_path().to_owned()),
        ),
        SessionStatus::Unauthenticated => GuardDecision::Render,
    }
}

/// Login URL that remembers `from` as the post-login destination.
pub fn login_redirect_path(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", encode_return_path(from))
}

/// Post-login destination from the (decoded) `redirect` parameter.
///
/// Only same-origin absolute paths are honoured.
pub fn post_login_target(redirect: Option<&str>) -> Option<String> {
    redirect.filter(|path| is_local_path(path)).map(str::to_owned)
}

/// Absolute path on this origin. Browsers read `\` as `/`, so `/\host` is
/// as foreign as `//host`; whitespace and control bytes are never accepted.
fn is_local_path(path: &str) -> bool {
    let mut bytes = path.bytes();
    bytes.next() == Some(b'/')
        && !matches!(bytes.next(), Some(b'/' | b'\\'))
        && !path.bytes().any(|b| b.is_ascii_control() || b.is_ascii_whitespace())
        && !path.starts_with(LOGIN_PATH)
}

/// Join router pathname and query string into one location.
pub fn join_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Percent-encode a path for use as a query value, keeping `/` readable.
pub fn encode_return_path(path: &str) -> String {
    urlencoding::encode(path).replace("%2F", "/")
}

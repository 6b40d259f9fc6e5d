//! Route wrappers that gate rendering on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decisions come from `util::guard`; these components only turn a decision
//! into markup and a `replace` navigation. While the startup check runs the
//! children are not rendered and no navigation happens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::access::PermissionTable;
use crate::state::session::SessionState;
use crate::util::guard::{
    GuardDecision, REDIRECT_PARAM, join_location, protected_route_decision, public_only_decision,
};

/// Render `children` only for a signed-in user allowed on this route.
#[component]
pub fn ProtectedRoute(
    /// Permission that unlocks the route when the role's route list does not.
    #[prop(optional, into)]
    permission: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    let decision = Memo::new(move |_| {
        let current = join_location(&pathname.get(), &search.get());
        protected_route_decision(&session.get(), PermissionTable::builtin(), &current, permission.as_deref())
    });
    follow_redirects(decision);

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending | GuardDecision::Redirect(_) => view! { <GuardPlaceholder/> }.into_any(),
    }
}

/// Render `children` only while signed out (login, password reset).
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let decision = Memo::new(move |_| {
        let redirect = query.get().get(REDIRECT_PARAM);
        public_only_decision(&session.get(), PermissionTable::builtin(), redirect.as_deref())
    });
    follow_redirects(decision);

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending | GuardDecision::Redirect(_) => view! { <GuardPlaceholder/> }.into_any(),
    }
}

#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="route-guard">
            <span class="route-guard__spinner" aria-busy="true">"Loading..."</span>
        </div>
    }
}

fn follow_redirects(decision: Memo<GuardDecision>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

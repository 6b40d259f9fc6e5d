//! Dashboard page: signed-in landing route with a profile summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedRoute` with no permission requirement, so every
//! signed-in role lands here. Navigation comes from the shell's menu.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::access::Role;
use crate::components::shell::AppShell;
use crate::state::controller::AppSession;
use crate::state::profile::UserProfile;
use crate::state::session::SessionState;

fn role_label(role: Option<Role>) -> &'static str {
    role.map_or("Unrecognized role", |r| r.label())
}

/// "Name (status)" for the active organization, if any.
fn organization_line(profile: &UserProfile) -> Option<String> {
    let org = profile.organization.as_ref()?;
    Some(match org.status.as_deref().filter(|s| !s.is_empty()) {
        Some(status) => format!("{} ({status})", org.name),
        None => org.name.clone(),
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<AppSession>();
    let reloading = RwSignal::new(false);

    let profile = Memo::new(move |_| state.with(|s| s.user_details().cloned()));

    let on_reload = move |_| {
        if reloading.get_untracked() {
            return;
        }
        reloading.set(true);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.reload_profile().await {
                    log::warn!("profile reload failed: {e}");
                }
                reloading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &session;
            reloading.set(false);
        }
    };

    view! {
        <AppShell title="Dashboard">
            <section class="dashboard-profile">
                {move || {
                    profile
                        .get()
                        .map(|p| {
                            view! {
                                <h2 class="dashboard-profile__name">{p.display_name()}</h2>
                                <p class="dashboard-profile__email">{p.email.clone()}</p>
                                <p class="dashboard-profile__role">{role_label(p.role)}</p>
                                <p class="dashboard-profile__org">{organization_line(&p).unwrap_or_default()}</p>
                            }
                        })
                }}
                <button class="dashboard-profile__reload" on:click=on_reload disabled=move || reloading.get()>
                    "Refresh profile"
                </button>
            </section>
        </AppShell>
    }
}

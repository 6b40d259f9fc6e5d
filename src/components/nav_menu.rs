//! Sidebar navigation built from the role's permitted routes.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::access::{PermissionTable, Role};
use crate::state::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: String,
}

/// Menu entries for `role`, in the table's display order. Route ids without
/// a route definition are skipped.
pub fn nav_items(table: &PermissionTable, role: Option<Role>) -> Vec<NavItem> {
    table
        .permitted_routes(role)
        .into_iter()
        .filter_map(|id| table.route(id))
        .map(|spec| NavItem { path: spec.path.clone(), label: spec.label.clone() })
        .collect()
}

fn is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        return current == "/" || current == "/dashboard";
    }
    current == item_path || current.starts_with(&format!("{item_path}/"))
}

#[component]
pub fn NavMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;

    let items = Memo::new(move |_| {
        let role = session.with(|s| s.user_details().and_then(|d| d.role));
        nav_items(PermissionTable::builtin(), role)
    });

    view! {
        <nav class="nav-menu">
            <For each=move || items.get() key=|item| item.path.clone() let:item>
                {
                    let path = item.path.clone();
                    view! {
                        <a
                            class="nav-menu__link"
                            class=("nav-menu__link--active", move || is_active(&path, &pathname.get()))
                            href=item.path
                        >
                            {item.label}
                        </a>
                    }
                }
            </For>
        </nav>
    }
}

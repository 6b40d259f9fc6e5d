//! Generic page for a guarded console section (users, videos, ...).

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::access::PermissionTable;
use crate::components::shell::AppShell;

fn section_title(table: &PermissionTable, route_id: &str) -> String {
    table.route(route_id).map_or_else(|| route_id.to_owned(), |spec| spec.label.clone())
}

#[component]
pub fn SectionPage(route_id: &'static str) -> impl IntoView {
    let title = section_title(PermissionTable::builtin(), route_id);
    let params = use_params_map();
    let item = move || params.read().get("id");

    view! {
        <AppShell title=title.clone()>
            <section class="section-page">
                <h2 class="section-page__title">{title}</h2>
                <Show when=move || item().is_some()>
                    <p class="section-page__item">"Item " {move || item().unwrap_or_default()}</p>
                </Show>
            </section>
        </AppShell>
    }
}

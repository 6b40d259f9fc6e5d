//! Signed-in page frame: header with profile, theme toggle and logout,
//! sidebar navigation, and the page body.

use leptos::prelude::*;

use crate::app::DarkMode;
use crate::components::nav_menu::NavMenu;
use crate::state::controller::AppSession;
use crate::state::session::SessionState;
use crate::util::settings::Settings;
use crate::util::theme;

#[component]
pub fn AppShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<AppSession>();
    let settings = expect_context::<Settings>();
    let dark = expect_context::<DarkMode>().0;

    let display_name = move || state.with(|s| s.user_details().map(|d| d.display_name()).unwrap_or_default());
    let on_toggle_theme = move |_| {
        let next = theme::toggle(&settings, dark.get_untracked());
        dark.set(next);
    };
    // The route guard sends the now signed-out user to the login page.
    let on_logout = move |_| session.logout();

    view! {
        <div class="app-shell">
            <header class="app-shell__header">
                <h1 class="app-shell__title">{title}</h1>
                <span class="app-shell__user">{display_name}</span>
                <button class="app-shell__button" on:click=on_toggle_theme>
                    {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                </button>
                <button class="app-shell__button app-shell__button--logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <div class="app-shell__body">
                <NavMenu/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}

//! Root application component with service wiring, context and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser adapters (storage, navigation, transport) are built once here
//! and shared through context, together with the single session signal.
//! Startup restore runs once on mount; until it finishes every guarded route
//! shows a placeholder.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{ProtectedRoute, PublicOnlyRoute};
use crate::config::ClientConfig;
use crate::net::api::AuthService;
use crate::net::http::HttpClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    dashboard::DashboardPage,
    login::LoginPage,
    not_found::NotFoundPage,
    reset_password::{ForgotPasswordPage, ResetPasswordPage},
    section::SectionPage,
    verify_user::VerifyUserPage,
};
use crate::state::controller::AppSession;
use crate::state::session::SessionState;
use crate::util::navigation::BrowserNavigator;
use crate::util::settings::Settings;
use crate::util::storage::{KeyValueStore, LocalStorage};
use crate::util::theme;
use crate::util::token_store::TokenStore;

/// Current dark-mode flag, shared so the toggle and the theme stay in sync.
#[derive(Clone, Copy)]
pub struct DarkMode(pub RwSignal<bool>);

fn wire_services(state: RwSignal<SessionState>) -> (AppSession, Settings) {
    let config = Arc::new(ClientConfig::from_build_env());
    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);
    let tokens = TokenStore::new(storage.clone(), Arc::new(BrowserNavigator));
    let http = HttpClient::new(config, Arc::new(BrowserTransport), tokens);
    (AppSession::new(state, AuthService::new(http)), Settings::new(storage))
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(SessionState::default());
    let (session, settings) = wire_services(state);

    let dark = RwSignal::new(theme::read_preference(&settings));
    theme::apply(dark.get_untracked());

    provide_context(state);
    provide_context(session.clone());
    provide_context(settings);
    provide_context(DarkMode(dark));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "csr"))]
    let _ = session;

    view! {
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicOnlyRoute><LoginPage/></PublicOnlyRoute> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <PublicOnlyRoute><ForgotPasswordPage/></PublicOnlyRoute> }
                />
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("token"))
                    view=|| view! { <PublicOnlyRoute><ResetPasswordPage/></PublicOnlyRoute> }
                />
                <Route path=(StaticSegment("verify-user"), ParamSegment("token")) view=VerifyUserPage/>

                <Route path=StaticSegment("") view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("organizations")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="manage_organizations">
                                <SectionPage route_id="organizations"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="manage_users">
                                <SectionPage route_id="users"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("journeys")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="manage_journeys">
                                <SectionPage route_id="journeys"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("journeys"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <ProtectedRoute permission="manage_journeys">
                                <SectionPage route_id="journeys"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("videos")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="view_videos">
                                <SectionPage route_id="videos"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("analytics")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="view_analytics">
                                <SectionPage route_id="analytics"/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| {
                        view! {
                            <ProtectedRoute permission="manage_settings">
                                <SectionPage route_id="settings"/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

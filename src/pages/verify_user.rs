//! Account verification link landing page (`/verify-user/:token`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::controller::AppSession;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Verification {
    Pending,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyUserPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let outcome = RwSignal::new(Verification::Pending);

    #[cfg(feature = "csr")]
    {
        let auth = session.auth().clone();
        let token = params.read_untracked().get("token").unwrap_or_default();
        leptos::task::spawn_local(async move {
            let next = match auth.verify_user(&token).await {
                Ok(_) => Verification::Verified,
                Err(e) => Verification::Failed(e.user_message()),
            };
            outcome.set(next);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (&session, params);
    }

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Account verification"</h1>
                {move || match outcome.get() {
                    Verification::Pending => view! { <p class="login-card__subtitle">"Verifying..."</p> }.into_any(),
                    Verification::Verified => {
                        view! { <p class="login-message">"Your account is verified."</p> }.into_any()
                    }
                    Verification::Failed(reason) => {
                        view! { <p class="login-message login-message--error">{reason}</p> }.into_any()
                    }
                }}
                <a class="login-link" href="/login">"Go to sign in"</a>
            </div>
        </div>
    }
}

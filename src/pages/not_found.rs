use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Page not found"</h1>
                <a class="login-link" href="/">"Back to the dashboard"</a>
            </div>
        </div>
    }
}

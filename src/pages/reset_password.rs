//! Password reset: request a reset link, then set a new password from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two routes share this module. `/forgot-password` asks the server to mail a
//! reset token. `/reset-password/:token` validates the token on load and, if
//! valid, submits the new password. Each step keeps its own status so a
//! failure in one never masks the other.
//!
//! ERROR HANDLING
//! ==============
//! Server messages are shown verbatim. An expired link answers 401 with a
//! benign message, which the HTTP client deliberately does not treat as a
//! session expiry.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::controller::AppSession;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StepStatus {
    Idle,
    Working,
    Done(String),
    Failed(String),
}

impl StepStatus {
    fn is_working(&self) -> bool {
        matches!(self, Self::Working)
    }

    fn message(&self) -> Option<String> {
        match self {
            Self::Done(m) | Self::Failed(m) => Some(m.clone()),
            Self::Idle | Self::Working => None,
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Self::Failed(_) => "login-message login-message--error",
            _ => "login-message",
        }
    }
}

/// Outcome of checking the token from the reset link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenCheck {
    Checking,
    Valid { email: Option<String> },
    Invalid(String),
}

pub(crate) fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter the email address of your account.");
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// Map the validation payload to a page state. A payload without an explicit
/// `valid: false` counts as valid since the call itself succeeded.
pub(crate) fn token_check_from(valid: Option<bool>, email: Option<String>) -> TokenCheck {
    if valid == Some(false) {
        TokenCheck::Invalid("This reset link is no longer valid.".to_owned())
    } else {
        TokenCheck::Valid { email }
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(StepStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(StepStatus::is_working) {
            return;
        }
        let email_value = match validate_reset_email(&email.get_untracked()) {
            Ok(v) => v,
            Err(msg) => {
                status.set(StepStatus::Failed(msg.to_owned()));
                return;
            }
        };
        status.set(StepStatus::Working);

        #[cfg(feature = "csr")]
        {
            let auth = session.auth().clone();
            leptos::task::spawn_local(async move {
                let next = match auth.request_password_reset_token(&email_value).await {
                    Ok(_) => StepStatus::Done("If the account exists, a reset link is on its way.".to_owned()),
                    Err(e) => StepStatus::Failed(e.user_message()),
                };
                status.set(next);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, email_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset password"</h1>
                <p class="login-card__subtitle">"We will email you a reset link."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || status.with(StepStatus::is_working)>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || status.with(|s| s.message().is_some())>
                    <p class=move || status.with(StepStatus::css_class)>
                        {move || status.with(StepStatus::message).unwrap_or_default()}
                    </p>
                </Show>
                <a class="login-link" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();

    let check = RwSignal::new(TokenCheck::Checking);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let status = RwSignal::new(StepStatus::Idle);

    #[cfg(feature = "csr")]
    {
        let auth = session.auth().clone();
        let token_value = token();
        leptos::task::spawn_local(async move {
            let next = match auth.validate_reset_token(&token_value).await {
                Ok(v) => token_check_from(v.valid, v.email),
                Err(e) => TokenCheck::Invalid(e.user_message()),
            };
            check.set(next);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(StepStatus::is_working) {
            return;
        }
        let password_value = match validate_new_password(&password.get_untracked(), &confirm.get_untracked()) {
            Ok(v) => v,
            Err(msg) => {
                status.set(StepStatus::Failed(msg.to_owned()));
                return;
            }
        };
        status.set(StepStatus::Working);

        #[cfg(feature = "csr")]
        {
            let auth = session.auth().clone();
            let token_value = token();
            leptos::task::spawn_local(async move {
                let next = match auth.reset_password(&password_value, &token_value).await {
                    Ok(_) => StepStatus::Done("Your password has been updated. You can sign in now.".to_owned()),
                    Err(e) => StepStatus::Failed(e.user_message()),
                };
                status.set(next);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, password_value, token);
        }
    };

    let form = move || {
        view! {
            <form class="login-form" on:submit=on_submit.clone()>
                <input
                    class="login-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="New password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Repeat new password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || status.with(StepStatus::is_working)>
                    "Set new password"
                </button>
            </form>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Choose a new password"</h1>
                {move || match check.get() {
                    TokenCheck::Checking => {
                        view! { <p class="login-card__subtitle">"Checking your reset link..."</p> }.into_any()
                    }
                    TokenCheck::Invalid(reason) => {
                        view! {
                            <p class="login-message login-message--error">{reason}</p>
                            <a class="login-link" href="/forgot-password">"Request a new link"</a>
                        }
                            .into_any()
                    }
                    TokenCheck::Valid { email } => {
                        view! {
                            <p class="login-card__subtitle">{email.unwrap_or_default()}</p>
                            {form()}
                        }
                            .into_any()
                    }
                }}
                <Show when=move || status.with(|s| s.message().is_some())>
                    <p class=move || status.with(StepStatus::css_class)>
                        {move || status.with(StepStatus::message).unwrap_or_default()}
                    </p>
                </Show>
                <a class="login-link" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}

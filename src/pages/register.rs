//! Registration page. Creates the account, then sends the visitor to login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::{ClientConfig, LOGIN_PATH};
use crate::net::types::RegisterRequest;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RegisterFormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Checks run in order: completeness, confirmation, length.
pub(crate) fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, RegisterFormError> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if [first_name, last_name, email, form.password.as_str(), form.confirm_password.as_str()]
        .iter()
        .any(|v| v.is_empty())
    {
        return Err(RegisterFormError::MissingFields);
    }
    if form.password != form.confirm_password {
        return Err(RegisterFormError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterFormError::PasswordTooShort);
    }
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let request = match form.with_untracked(validate_register_form) {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &request).await {
                    Ok(()) => {
                        log::info!("account created for {}", request.email);
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, request);
        }
    };

    let field = move |placeholder: &'static str,
                      kind: &'static str,
                      get: fn(&RegisterForm) -> &String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        {field("First Name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                        {field("Last Name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
                    </div>
                    {field("Email Address", "email", |f| &f.email, |f, v| f.email = v)}
                    {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {field("Confirm Password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Sign In"</A>
                </p>
            </div>
        </div>
    }
}

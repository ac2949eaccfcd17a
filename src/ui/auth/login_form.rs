//! Sign-in form component
//!
//! Two fields (email-or-username, password) validated against the sign-in
//! schema and posted to `/api/login`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::field_bindings;
use crate::core::{FormState, LOGIN_ENDPOINT, SubmissionStatus, login_schema, submit};
use crate::ui::common::{ErrorMessage, FormField, SuccessMessage};
use crate::ui::icon::{Icon, icons};

const DEFAULT_SUCCESS: &str = "Signin successful!";

/// Sign-in form component
#[component]
pub fn LoginForm(
    /// Callback when the endpoint accepted the submission
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the sign-up screen
    #[prop(optional, into)]
    on_signup_click: Option<Callback<()>>,
) -> impl IntoView {
    let schema = StoredValue::new(login_schema());
    let form = RwSignal::new(FormState::new(&schema.get_value()));

    let (email, on_email, email_error) = field_bindings(form, "email");
    let (password, on_password, password_error) = field_bindings(form, "password");

    let pending = Signal::derive(move || form.with(|f| f.status().is_pending()));
    let success_banner = Signal::derive(move || {
        form.with(|f| match f.status() {
            SubmissionStatus::Success(message) => {
                Some(message.clone().unwrap_or_else(|| DEFAULT_SUCCESS.to_string()))
            }
            _ => None,
        })
    });
    let failure_banner = Signal::derive(move || {
        form.with(|f| match f.status() {
            SubmissionStatus::Failure(message) => Some(message.clone()),
            _ => None,
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let started = form
            .try_update(|f| f.begin_submit(&schema.get_value()))
            .unwrap_or(false);
        if !started {
            return;
        }

        let values = form.with_untracked(|f| f.values().clone());
        spawn_local(async move {
            let outcome = submit(LOGIN_ENDPOINT, &schema.get_value(), &values).await;
            let accepted = outcome.is_ok();
            form.update(|f| f.resolve(outcome));

            if accepted {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            // Header
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    "Sign in to your account"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="text-accent-primary hover:text-accent-primary-hover font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_signup_click.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        "Create a free account"
                    </button>
                </p>
            </div>

            // Status banners
            <SuccessMessage message=success_banner />
            <ErrorMessage error=failure_banner />

            <FormField
                label="Email or Username"
                placeholder="Email or Username"
                autocomplete="username"
                value=email
                on_input=on_email
                error=email_error
            />

            <FormField
                label="Password"
                input_type="password"
                placeholder="Password"
                autocomplete="current-password"
                value=password
                on_input=on_password
                error=password_error
            />

            // Submit button, disabled while a request is in flight
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-medium rounded-lg
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || pending.get()
            >
                {move || {
                    if pending.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                "Signing in..."
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="flex items-center justify-center">
                                "Sign in"
                                <Icon name=icons::ARROW_RIGHT class="ml-2 h-4 w-4" />
                            </span>
                        }.into_any()
                    }
                }}
            </button>
        </form>
    }
}

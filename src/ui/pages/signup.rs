//! Sign-up page component
//!
//! Hosts the sign-up form and, once the endpoint accepts, schedules a
//! redirect to the sign-in screen after a fixed delay. The timer handle is
//! owned by the page and cancelled on unmount, so navigating away before it
//! fires never triggers a stale redirect.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::SignupForm;

#[cfg(not(feature = "ssr"))]
use crate::core::LOGIN_REDIRECT_DELAY_MS;

/// Sign-up page component
#[component]
pub fn SignupPage() -> impl IntoView {
    // Schedule the delayed redirect on success
    #[cfg(not(feature = "ssr"))]
    let on_success = {
        use gloo_timers::callback::Timeout;

        let redirect = StoredValue::new_local(None::<Timeout>);

        on_cleanup(move || {
            redirect.update_value(|slot| {
                if let Some(timer) = slot.take() {
                    timer.cancel();
                }
            });
        });

        Callback::new(move |_: ()| {
            let navigate = use_navigate();
            let timer = Timeout::new(LOGIN_REDIRECT_DELAY_MS, move || {
                navigate("/login", Default::default());
            });
            redirect.set_value(Some(timer));
        })
    };

    // The server render never submits, so there is nothing to schedule
    #[cfg(feature = "ssr")]
    let on_success = Callback::new(move |_: ()| {});

    // Switch to the sign-in page
    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <span class="text-xl font-bold text-theme-primary">"AuthGate"</span>
                        </A>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    <SignupForm
                        on_success=on_success
                        on_login_click=Callback::new(on_login_click)
                    />
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 AuthGate. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}

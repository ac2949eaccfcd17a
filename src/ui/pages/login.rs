//! Sign-in page component
//!
//! Hosts the sign-in form. A successful sign-in shows the success banner in
//! place; there is no session to establish, so no navigation happens.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::LoginForm;

/// Sign-in page component
#[component]
pub fn LoginPage() -> impl IntoView {
    // Switch to the sign-up page
    let on_signup_click = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
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
                    <LoginForm on_signup_click=Callback::new(on_signup_click) />
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

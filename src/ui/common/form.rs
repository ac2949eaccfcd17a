use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label, input, and inline error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Error message to display beneath the input
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

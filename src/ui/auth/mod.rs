//! Form screen components
//!
//! Each form binds a validation schema and the submission flow to a fixed
//! field set and renders inline errors plus a status banner.

mod login_form;
mod signup_form;

pub use login_form::LoginForm;
pub use signup_form::SignupForm;

use leptos::prelude::*;

use crate::core::FormState;

/// Derive the per-field signals a [`crate::ui::common::FormField`] needs
/// from the shared form state
pub(crate) fn field_bindings(
    form: RwSignal<FormState>,
    name: &'static str,
) -> (Signal<String>, Callback<String>, Signal<Option<String>>) {
    let value = Signal::derive(move || form.with(|f| f.value(name).to_string()));
    let on_input = Callback::new(move |v: String| form.update(|f| f.set_value(name, v)));
    let error = Signal::derive(move || form.with(|f| f.error(name).map(str::to_string)));
    (value, on_input, error)
}

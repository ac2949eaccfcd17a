use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const LOADER: &str = "loader";
}

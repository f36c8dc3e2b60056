use dioxus::prelude::*;
use crate::utils::ThemeState;

#[component]
pub fn Home() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let mode = if theme().is_dark { "dark" } else { "light" };

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Theme Toggle"
            }
            p {
                class: "text-gray-600 dark:text-gray-300",
                "The page is in {mode} mode. Your choice is remembered in this browser."
            }
        }
    }
}

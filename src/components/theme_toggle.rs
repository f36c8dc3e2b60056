use dioxus::prelude::*;
use crate::utils::ThemeState;
#[cfg(target_arch = "wasm32")]
use crate::{ configs::ToggleConfig, utils::ThemeController, web::{ self, WebHost } };

/// Toggle button using the default DOM ids. Publishes the active theme into the
/// `Signal<ThemeState>` context so the rest of the UI can restyle.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    #[cfg(target_arch = "wasm32")]
    let mut controller = use_signal(|| None::<ThemeController<WebHost>>);

    // Runs after the first render, once the icon elements exist.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let config = ToggleConfig { sync_root_on_init: true, ..ToggleConfig::default() };
            match web::mount(config) {
                Ok(mounted) => {
                    match mounted.current_theme() {
                        Ok(current) => theme.set(current.into()),
                        Err(e) => log::warn!("Could not read initial theme: {}", e),
                    }
                    controller.set(Some(mounted));
                }
                Err(e) => log::error!("Theme toggle not mounted: {}", e),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        log::warn!("Theme persistence needs a browser; toggling in memory only");
    });

    let on_click = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            let result = match controller.write().as_mut() {
                Some(mounted) => mounted.toggle(),
                None => return,
            };
            match result {
                Ok(next) => theme.set(next.into()),
                Err(e) => log::error!("Theme toggle failed: {}", e),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        theme.with_mut(|state| state.is_dark = !state.is_dark);
    };

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            title: "Toggle color theme",
            class: if theme().is_dark {
                "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
            } else {
                "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
            },
            onclick: on_click,
            span { id: "theme-toggle-dark-icon", class: "hidden", "🌙" }
            span { id: "theme-toggle-light-icon", class: "hidden", "🌞" }
        }
    }
}

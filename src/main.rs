use dioxus::prelude::*;
use theme_toggle::utils::ThemeState;
use theme_toggle::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&e.to_string().into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(ThemeState::default);
    use_context_provider(|| theme);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#f9fafb" }
        Router::<Route> {}
    }
}

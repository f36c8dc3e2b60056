pub mod controller;
pub mod host;
pub mod theme;
pub mod theme_state;

pub use controller::ThemeController;
pub use host::ThemeHost;
pub use theme::{ Icon, Theme, CHROME_COLOR_DARK, CHROME_COLOR_LIGHT };
pub use theme_state::ThemeState;

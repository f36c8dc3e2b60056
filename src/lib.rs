mod views;
mod components;
pub mod utils;
mod routes;
pub mod configs;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::ToggleConfig;
pub use crate::error::ThemeError;
pub use crate::components::ThemeToggle;
pub use crate::views::{ Home, Navbar };

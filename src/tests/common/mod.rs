pub mod mocks;

use crate::configs::ToggleConfig;
use crate::utils::ThemeController;
use mocks::MemoryHost;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A controller over a fresh page with both icons hidden, as served.
pub fn controller_with(host: MemoryHost) -> ThemeController<MemoryHost> {
    setup();
    ThemeController::new(host, ToggleConfig::default())
}

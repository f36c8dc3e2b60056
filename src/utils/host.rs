use crate::error::ThemeError;
use crate::utils::Icon;

/// Everything the theme controller needs from the page it runs in.
///
/// The browser implementation lives in `crate::web`. Tests use an in-memory host.
pub trait ThemeHost {
    fn root_has_class(&self, class: &str) -> Result<bool, ThemeError>;

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;

    /// Adds (`hidden == true`) or removes the hidden class on one of the icons.
    fn set_icon_hidden(&mut self, icon: Icon, class: &str, hidden: bool) -> Result<(), ThemeError>;

    /// Whether the page carries a chrome color hint element.
    fn has_chrome_hint(&self) -> bool;

    fn set_chrome_color(&mut self, color: &str) -> Result<(), ThemeError>;

    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;

    fn system_prefers_dark(&self) -> bool;
}

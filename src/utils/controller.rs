use crate::configs::ToggleConfig;
use crate::error::ThemeError;
use crate::utils::{ Icon, Theme, ThemeHost };

/// Drives the light/dark toggle against a [`ThemeHost`].
///
/// Built once per page. `initialize` runs at load, `toggle` on every click.
pub struct ThemeController<H: ThemeHost> {
    host: H,
    config: ToggleConfig,
}

impl<H: ThemeHost> ThemeController<H> {
    pub fn new(host: H, config: ToggleConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Shows the icon matching the stored or system preference and returns the
    /// effective theme. The root class and chrome hint are left alone unless the
    /// config opts in.
    pub fn initialize(&mut self) -> Result<Theme, ThemeError> {
        let stored = self.host.read_preference(&self.config.storage_key)?;
        let system_dark = self.host.system_prefers_dark();
        let theme = Theme::resolve_initial(stored.as_deref(), system_dark);

        log::debug!(
            "Initial theme {} (stored: {:?}, system dark: {})",
            theme,
            stored,
            system_dark
        );

        self.show_affordance(theme)?;
        if self.config.sync_root_on_init {
            self.host.set_root_class(&self.config.root_class, theme.is_dark())?;
            if self.host.has_chrome_hint() {
                self.host.set_chrome_color(theme.chrome_color())?;
            }
        }
        Ok(theme)
    }

    /// Theme currently shown on the page, read from the root marker class.
    pub fn current_theme(&self) -> Result<Theme, ThemeError> {
        let is_dark = self.host.root_has_class(&self.config.root_class)?;
        Ok(if is_dark { Theme::Dark } else { Theme::Light })
    }

    /// Flips the page theme and persists the new choice.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.current_theme()?.toggled();

        self.host.set_root_class(&self.config.root_class, next.is_dark())?;
        if self.host.has_chrome_hint() {
            self.host.set_chrome_color(next.chrome_color())?;
        }
        self.show_affordance(next)?;
        self.host.write_preference(&self.config.storage_key, next.as_str())?;

        log::debug!("Theme toggled to {}", next);
        Ok(next)
    }

    fn show_affordance(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let visible = Icon::affordance_for(theme);
        self.host.set_icon_hidden(visible, &self.config.hidden_class, false)?;
        self.host.set_icon_hidden(visible.other(), &self.config.hidden_class, true)
    }
}

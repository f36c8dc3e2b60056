use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;

/// Chrome hint color while the light theme is active.
pub const CHROME_COLOR_LIGHT: &str = "#f9fafb";
/// Chrome hint color while the dark theme is active.
pub const CHROME_COLOR_DARK: &str = "#111827";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Picks the theme a page should start in.
    ///
    /// `stored` is the raw persisted value, `None` when the key was never written.
    /// The system signal is only consulted when nothing is stored, so any stored
    /// value other than `"dark"` means light.
    pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(value) if value == Theme::Dark.as_str() => Theme::Dark,
            Some(value) => {
                if value.parse::<Theme>().is_err() {
                    log::warn!("Ignoring unrecognised stored theme {:?}", value);
                }
                Theme::Light
            }
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn chrome_color(self) -> &'static str {
        match self {
            Theme::Light => CHROME_COLOR_LIGHT,
            Theme::Dark => CHROME_COLOR_DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// The two toggle icons. Each one offers a switch *to* the theme it is named after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Dark,
    Light,
}

impl Icon {
    /// The icon that should be visible while `theme` is active.
    pub fn affordance_for(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Icon::Light,
            Theme::Light => Icon::Dark,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Icon::Dark => Icon::Light,
            Icon::Light => Icon::Dark,
        }
    }
}

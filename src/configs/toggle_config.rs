use serde::Deserialize;
use crate::error::ThemeError;

/// Element ids, class names and the storage key the toggle works against.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub toggle_id: String,
    pub dark_icon_id: String,
    pub light_icon_id: String,
    pub hidden_class: String,
    pub root_class: String,
    pub storage_key: String,
    /// Also set the root class during `initialize`. Off unless the page has no
    /// script of its own applying it before first paint.
    pub sync_root_on_init: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_string(),
            dark_icon_id: "theme-toggle-dark-icon".to_string(),
            light_icon_id: "theme-toggle-light-icon".to_string(),
            hidden_class: "hidden".to_string(),
            root_class: "dark".to_string(),
            storage_key: "color-theme".to_string(),
            sync_root_on_init: false,
        }
    }
}

impl ToggleConfig {
    /// Parses a partial JSON object; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: ToggleConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `raw` is absent or blank, otherwise [`ToggleConfig::from_json`].
    pub fn from_overrides(raw: Option<&str>) -> Result<Self, ThemeError> {
        match raw.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("toggle_id", &self.toggle_id),
            ("dark_icon_id", &self.dark_icon_id),
            ("light_icon_id", &self.light_icon_id),
            ("hidden_class", &self.hidden_class),
            ("root_class", &self.root_class),
            ("storage_key", &self.storage_key),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.dark_icon_id == self.light_icon_id {
            return Err(ThemeError::Config("icon ids must differ".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ToggleConfig::from_json(r#"{ "storage_key": "site-theme" }"#).unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert!(!config.sync_root_on_init);
    }

    #[test]
    fn missing_or_blank_overrides_use_defaults() {
        assert_eq!(ToggleConfig::from_overrides(None).unwrap(), ToggleConfig::default());
        assert_eq!(ToggleConfig::from_overrides(Some("  ")).unwrap(), ToggleConfig::default());
    }

    #[test]
    fn overrides_go_through_json_parsing_and_validation() {
        let config = ToggleConfig::from_overrides(Some(r#"{ "toggle_id": "mode-switch" }"#)).unwrap();
        assert_eq!(config.toggle_id, "mode-switch");
        assert_eq!(config.dark_icon_id, "theme-toggle-dark-icon");

        let result = ToggleConfig::from_overrides(Some(r#"{ "light_icon_id": "theme-toggle-dark-icon" }"#));
        assert!(matches!(result, Err(ThemeError::Config(_))));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let result = ToggleConfig::from_json(r#"{ "root_class": "  " }"#);
        assert!(matches!(result, Err(ThemeError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(ToggleConfig::from_json("{"), Err(ThemeError::Config(_))));
    }

    #[test]
    fn identical_icon_ids_are_rejected() {
        let config = ToggleConfig {
            light_icon_id: "theme-toggle-dark-icon".to_string(),
            ..ToggleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

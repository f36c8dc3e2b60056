use std::collections::{ HashMap, HashSet };

use crate::error::ThemeError;
use crate::utils::{ Icon, ThemeHost };

/// In-memory page: class sets for `<html>` and both icons, an optional chrome
/// hint, and a key-value store.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    pub root_classes: HashSet<String>,
    pub icon_classes: HashMap<Icon, HashSet<String>>,
    pub chrome_hint: Option<String>,
    pub storage: HashMap<String, String>,
    pub system_dark: bool,
    pub fail_writes: bool,
}

impl MemoryHost {
    pub fn new(system_dark: bool) -> Self {
        let hidden = || HashSet::from(["hidden".to_string()]);
        Self {
            root_classes: HashSet::new(),
            icon_classes: HashMap::from([(Icon::Dark, hidden()), (Icon::Light, hidden())]),
            chrome_hint: None,
            storage: HashMap::new(),
            system_dark,
            fail_writes: false,
        }
    }

    pub fn with_stored(mut self, value: &str) -> Self {
        self.storage.insert("color-theme".to_string(), value.to_string());
        self
    }

    pub fn with_chrome_hint(mut self) -> Self {
        self.chrome_hint = Some(String::new());
        self
    }

    pub fn with_root_dark(mut self) -> Self {
        self.root_classes.insert("dark".to_string());
        self
    }

    pub fn is_visible(&self, icon: Icon) -> bool {
        !self.icon_classes[&icon].contains("hidden")
    }

    pub fn visible_icons(&self) -> Vec<Icon> {
        [Icon::Dark, Icon::Light]
            .into_iter()
            .filter(|icon| self.is_visible(*icon))
            .collect()
    }

    pub fn stored(&self) -> Option<&str> {
        self.storage.get("color-theme").map(String::as_str)
    }
}

impl ThemeHost for MemoryHost {
    fn root_has_class(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.root_classes.contains(class))
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        if present {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
        Ok(())
    }

    fn set_icon_hidden(&mut self, icon: Icon, class: &str, hidden: bool) -> Result<(), ThemeError> {
        let classes = self.icon_classes.entry(icon).or_default();
        if hidden {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn has_chrome_hint(&self) -> bool {
        self.chrome_hint.is_some()
    }

    fn set_chrome_color(&mut self, color: &str) -> Result<(), ThemeError> {
        self.chrome_hint = Some(color.to_string());
        Ok(())
    }

    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.storage.get(key).cloned())
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        self.storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }
}

//! Browser-backed [`ThemeHost`] and the click wiring for plain HTML pages.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Storage, Window };

use crate::configs::ToggleConfig;
use crate::error::ThemeError;
use crate::utils::{ Icon, ThemeController, ThemeHost };

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const CHROME_HINT_SELECTOR: &str = "meta[name=\"theme-color\"]";

pub struct WebHost {
    root: Element,
    dark_icon: Element,
    light_icon: Element,
    chrome_hint: Option<Element>,
    storage: Storage,
    system_dark: bool,
}

fn window() -> Result<Window, ThemeError> {
    web_sys::window().ok_or_else(|| ThemeError::Environment("no window".to_string()))
}

fn document() -> Result<Document, ThemeError> {
    window()?
        .document()
        .ok_or_else(|| ThemeError::Environment("no document".to_string()))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, ThemeError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ThemeError::MissingElement(id.to_string()))
}

impl WebHost {
    /// Looks up every element the toggle touches. Fails on the first missing one.
    pub fn from_document(config: &ToggleConfig) -> Result<Self, ThemeError> {
        let window = window()?;
        let document = document()?;

        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::MissingElement("html".to_string()))?;
        let dark_icon = element_by_id(&document, &config.dark_icon_id)?;
        let light_icon = element_by_id(&document, &config.light_icon_id)?;
        let chrome_hint = document.query_selector(CHROME_HINT_SELECTOR)?;

        let storage = window
            .local_storage()?
            .ok_or_else(|| ThemeError::Environment("localStorage unavailable".to_string()))?;

        // Evaluated once; later changes to the OS setting are not followed.
        let system_dark = window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map(|list| list.matches())
            .unwrap_or(false);

        Ok(Self { root, dark_icon, light_icon, chrome_hint, storage, system_dark })
    }

    fn icon(&self, icon: Icon) -> &Element {
        match icon {
            Icon::Dark => &self.dark_icon,
            Icon::Light => &self.light_icon,
        }
    }
}

impl ThemeHost for WebHost {
    fn root_has_class(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.root.class_list().contains(class))
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.root.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    fn set_icon_hidden(&mut self, icon: Icon, class: &str, hidden: bool) -> Result<(), ThemeError> {
        self.icon(icon).class_list().toggle_with_force(class, hidden)?;
        Ok(())
    }

    fn has_chrome_hint(&self) -> bool {
        self.chrome_hint.is_some()
    }

    fn set_chrome_color(&mut self, color: &str) -> Result<(), ThemeError> {
        if let Some(meta) = &self.chrome_hint {
            meta.set_attribute("content", color)?;
        }
        Ok(())
    }

    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }
}

/// Builds a controller over the current document and runs its initial pass.
pub fn mount(config: ToggleConfig) -> Result<ThemeController<WebHost>, ThemeError> {
    config.validate()?;
    let host = WebHost::from_document(&config)?;
    let mut controller = ThemeController::new(host, config);
    controller.initialize()?;
    Ok(controller)
}

/// Mounts the controller and hooks `toggle` to the toggle button's click event.
/// The listener lives as long as the page.
pub fn install(config: ToggleConfig) -> Result<(), ThemeError> {
    let button = element_by_id(&document()?, &config.toggle_id)?;
    let controller = Rc::new(RefCell::new(mount(config)?));

    let handler = Closure::wrap(Box::new(move || {
        if let Err(e) = controller.borrow_mut().toggle() {
            log::error!("Theme toggle failed: {}", e);
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();

    log::info!("Theme toggle installed");
    Ok(())
}

/// Entry point for static pages that only load the wasm bundle. `config_json`
/// is an optional partial [`ToggleConfig`] object, e.g. `{"storage_key":"site-theme"}`.
#[wasm_bindgen]
pub fn install_theme_toggle(config_json: Option<String>) -> Result<(), JsValue> {
    ToggleConfig::from_overrides(config_json.as_deref())
        .and_then(install)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

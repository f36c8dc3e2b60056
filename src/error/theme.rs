use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum ThemeError {
    /// A required element id (or `<html>` itself) is not in the document.
    MissingElement(String),
    /// The browser environment is unavailable, e.g. no `window` or no `localStorage`.
    Environment(String),
    Storage(String),
    Dom(String),
    UnknownTheme(String),
    Config(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::MissingElement(id) => write!(f, "Missing Element: #{}", id),
            ThemeError::Environment(msg) => write!(f, "Environment Error: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::UnknownTheme(value) => write!(f, "Unknown Theme: {:?}", value),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(error) => String::from(error.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ThemeError::Dom(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_id() {
        let err = ThemeError::MissingElement("theme-toggle".to_string());
        assert_eq!(err.to_string(), "Missing Element: #theme-toggle");
    }
}

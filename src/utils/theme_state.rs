use crate::utils::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self { is_dark: theme == Theme::Dark }
    }
}

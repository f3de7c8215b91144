use serde::Deserialize;

use super::tab::Tab;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native: String,
}

/// Decorative header state. None of it feeds back into routing.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    pub language: String,
    pub notification_count: u32,
    pub menu_open: bool,
}

impl HeaderState {
    pub fn new(language: impl Into<String>, notification_count: u32) -> Self {
        Self {
            language: language.into(),
            notification_count,
            menu_open: false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the drawer and hands the chosen tab back for reporting.
    pub fn choose(&mut self, tab: Tab) -> Tab {
        self.menu_open = false;
        tab
    }

    pub fn select_language(&mut self, code: &str) {
        self.language = code.to_string();
    }

    /// The selected language, or the first one offered if the code is unknown.
    pub fn current_language<'a>(&self, languages: &'a [Language]) -> Option<&'a Language> {
        languages
            .iter()
            .find(|l| l.code == self.language)
            .or_else(|| languages.first())
    }

    pub fn badge_text(&self) -> Option<String> {
        match self.notification_count {
            0 => None,
            n if n > 9 => Some("9+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

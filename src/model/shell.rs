use super::tab::Tab;

/// State owned by the root composer: the active tab plus the unrelated
/// standalone-display flag recorded at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    active: Tab,
    standalone: bool,
}

impl ShellState {
    /// Builds the initial state from the `tab` query parameter. Missing,
    /// blank or unknown values start on the default screen.
    pub fn from_deep_link(param: Option<&str>) -> Self {
        let active = param
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Tab::resolve)
            .unwrap_or_default();
        Self {
            active,
            standalone: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Replaces the active tab. Reselecting the current tab is allowed and
    /// unknown ids fall through to the registry default.
    pub fn set_active_tab(&mut self, id: &str) -> Tab {
        self.active = Tab::resolve(id);
        self.active
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn mark_standalone(&mut self, standalone: bool) {
        self.standalone = standalone;
    }
}

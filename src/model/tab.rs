use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a top-level screen. The declaration order is the order the
/// navigation controls are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Advisory,
    Pest,
    Weather,
    Market,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0:?}")]
pub struct UnknownTab(pub String);

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Advisory,
        Tab::Pest,
        Tab::Weather,
        Tab::Market,
        Tab::Profile,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Advisory => "advisory",
            Tab::Pest => "pest",
            Tab::Weather => "weather",
            Tab::Market => "market",
            Tab::Profile => "profile",
        }
    }

    /// Label used under the bottom navigation icons.
    pub fn short_label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Advisory => "Advisory",
            Tab::Pest => "Pest",
            Tab::Weather => "Weather",
            Tab::Market => "Market",
            Tab::Profile => "Profile",
        }
    }

    /// Label used in the header drawer menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Tab::Pest => "Pest Detection",
            other => other.short_label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Advisory => "🌿",
            Tab::Pest => "🐛",
            Tab::Weather => "🌧",
            Tab::Market => "📈",
            Tab::Profile => "👤",
        }
    }

    /// Registry lookup: ids outside the known set land on the default screen.
    pub fn resolve(id: &str) -> Tab {
        id.parse().unwrap_or_default()
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One rendered navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub tab: Tab,
    pub active: bool,
}

/// The fixed, ordered set of navigation controls with the active one marked.
pub fn nav_entries(active: Tab) -> impl Iterator<Item = NavEntry> {
    Tab::ALL.into_iter().map(move |tab| NavEntry {
        tab,
        active: tab == active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_resolve_to_home() {
        for id in ["", "HOME", "settings", " pest", "market/", "profile?x=1", "🐛"] {
            assert_eq!(Tab::resolve(id), Tab::Home, "id {id:?}");
        }
    }

    #[test]
    fn known_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::resolve(tab.id()), tab);
            assert_eq!(tab.to_string(), tab.id());
        }
    }

    #[test]
    fn exactly_one_entry_is_active() {
        for tab in Tab::ALL {
            let active: Vec<_> = nav_entries(tab).filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, tab);
        }
    }

    #[test]
    fn entries_keep_declared_order() {
        let order: Vec<_> = nav_entries(Tab::Home).map(|e| e.tab.id()).collect();
        assert_eq!(order, ["home", "advisory", "pest", "weather", "market", "profile"]);
    }

    #[test]
    fn parse_error_names_the_id() {
        let err = "farm".parse::<Tab>().unwrap_err();
        assert_eq!(err, UnknownTab("farm".to_string()));
    }
}

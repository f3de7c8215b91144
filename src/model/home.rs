use serde::Deserialize;

use super::tab::Tab;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CropHealth {
    pub overall: u8,
    pub irrigation: String,
    pub fertilizer: String,
    pub pest_risk: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceSummary {
    pub crop: String,
    pub price: u32,
    pub change: f64,
}

impl PriceSummary {
    pub fn is_rising(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Priority::High => "dot dot-red",
            Priority::Medium => "dot dot-yellow",
            Priority::Low => "dot dot-green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeAlert {
    pub kind: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    pub crop_health: CropHealth,
    pub prices: Vec<PriceSummary>,
    pub alerts: Vec<HomeAlert>,
}

/// A home-screen shortcut into another tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: Tab,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "Detect Pest", icon: "🐛", target: Tab::Pest },
    QuickAction { label: "Weather", icon: "☀️", target: Tab::Weather },
    QuickAction { label: "Market", icon: "💰", target: Tab::Market },
    QuickAction { label: "AI Assistant", icon: "🎤", target: Tab::Advisory },
];

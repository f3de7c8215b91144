use serde::Deserialize;
use std::time::Duration;

/// App-wide settings, read from the `settings` section of the content document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub analysis_delay_ms: u64,
    pub notification_count: u32,
    pub default_language: String,
    pub version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Smart Crop Advisory".to_string(),
            analysis_delay_ms: 3000,
            notification_count: 3,
            default_language: "en".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

impl Settings {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"analysis_delay_ms": 500}"#).unwrap();
        assert_eq!(settings.analysis_delay(), Duration::from_millis(500));
        assert_eq!(settings.title, "Smart Crop Advisory");
        assert_eq!(settings.notification_count, 3);
    }
}

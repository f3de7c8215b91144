//! Static content: every mock dataset the screens show, plus app settings.
//!
//! The document is embedded at build time and parsed once at startup:
//!
//! ```text
//! assets/content.json
//!   settings   # title, analysis delay, notification count, ...
//!   languages  # header language picker
//!   home | advisory | pest | weather | market | profile
//! ```

use serde::Deserialize;

use crate::config::Settings;
use crate::model::advisory::AdvisoryContent;
use crate::model::header::Language;
use crate::model::home::HomeContent;
use crate::model::market::MarketContent;
use crate::model::pest::PestContent;
use crate::model::profile::ProfileContent;
use crate::model::weather::WeatherContent;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("advisory default entry {0:?} has no text")]
    MissingDefaultAdvice(String),

    #[error("price alert {0} is listed twice")]
    DuplicateAlert(u64),
}

pub type Result<T> = core::result::Result<T, ContentError>;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub settings: Settings,
    pub languages: Vec<Language>,
    pub home: HomeContent,
    pub advisory: AdvisoryContent,
    pub pest: PestContent,
    pub weather: WeatherContent,
    pub market: MarketContent,
    pub profile: ProfileContent,
}

impl Content {
    pub fn parse(json: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED)
    }

    fn validate(&self) -> Result<()> {
        let advisory = &self.advisory;
        if !advisory.entries.is_empty() && !advisory.entries.contains_key(&advisory.default_entry) {
            return Err(ContentError::MissingDefaultAdvice(advisory.default_entry.clone()));
        }
        let mut ids: Vec<u64> = self.market.alerts.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(ContentError::DuplicateAlert(pair[0]));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::market::top_gainers;

    #[test]
    fn embedded_document_loads() {
        let content = Content::embedded().expect("embedded content parses");
        assert_eq!(content.settings.title, "Smart Crop Advisory");
        assert_eq!(content.languages.len(), 6);
        assert_eq!(content.advisory.crops.len(), 10);
        assert_eq!(content.advisory.soils.len(), 6);
        assert_eq!(content.pest.results.len(), 2);
        assert_eq!(content.weather.forecast.len(), 5);
        assert_eq!(content.market.rows.len(), 6);
        assert_eq!(content.profile.profile.initials(), "RK");
    }

    #[test]
    fn embedded_advisory_falls_back_to_wheat() {
        let content = Content::embedded().unwrap();
        let rice = content.advisory.advice_for("RICE").unwrap();
        assert!(!rice.is_fallback());
        assert!(rice.entry().irrigation.starts_with("Water level"));
        let maize = content.advisory.advice_for("Maize").unwrap();
        assert!(maize.is_fallback());
        assert_eq!(maize.entry(), &content.advisory.entries["wheat"]);
    }

    #[test]
    fn embedded_market_insights() {
        let content = Content::embedded().unwrap();
        let top = top_gainers(&content.market.rows, 1);
        assert_eq!(top[0].crop, "Cotton");
        assert!(!content.market.alerts[0].is_reached());
        assert!(content.market.alerts[1].is_reached());
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let content = Content::parse("{}").unwrap();
        assert_eq!(content, Content::default());
    }

    #[test]
    fn missing_default_advice_is_rejected() {
        let json = r#"{"advisory": {"default_entry": "wheat", "entries": {"rice": {}}}}"#;
        assert!(matches!(
            Content::parse(json),
            Err(ContentError::MissingDefaultAdvice(key)) if key == "wheat"
        ));
    }

    #[test]
    fn duplicate_alert_ids_are_rejected() {
        let alert = r#"{"id": 7, "crop": "Rice", "target_price": 1, "current_price": 1,
            "direction": "above", "active": true}"#;
        let json = format!(r#"{{"market": {{"alerts": [{alert}, {alert}]}}}}"#);
        assert!(matches!(Content::parse(&json), Err(ContentError::DuplicateAlert(7))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Content::parse("{"), Err(ContentError::Json(_))));
    }
}

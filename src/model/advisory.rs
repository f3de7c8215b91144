//! Farm-information form and the crop advisory lookup table.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AdvisoryEntry {
    pub irrigation: String,
    pub fertilizer: String,
    pub pest_control: String,
    pub best_practices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub heading: String,
    pub text: String,
}

/// Advisory text keyed by lowercase crop name, with a declared default entry
/// for crops that have no text of their own.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AdvisoryContent {
    pub crops: Vec<String>,
    pub soils: Vec<String>,
    pub default_entry: String,
    pub entries: BTreeMap<String, AdvisoryEntry>,
    pub weather_notes: Vec<Note>,
}

/// Result of an advisory lookup. `Fallback` means the crop had no entry and
/// the default crop's text is being shown instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdviceLookup<'a> {
    Matched(&'a AdvisoryEntry),
    Fallback(&'a AdvisoryEntry),
}

impl<'a> AdviceLookup<'a> {
    pub fn entry(self) -> &'a AdvisoryEntry {
        match self {
            AdviceLookup::Matched(e) | AdviceLookup::Fallback(e) => e,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, AdviceLookup::Fallback(_))
    }
}

impl AdvisoryContent {
    pub fn advice_for(&self, crop: &str) -> Option<AdviceLookup<'_>> {
        let key = crop.trim().to_lowercase();
        if let Some(entry) = self.entries.get(&key) {
            return Some(AdviceLookup::Matched(entry));
        }
        self.entries.get(&self.default_entry).map(AdviceLookup::Fallback)
    }

    /// Display name for a selected crop id, or the id itself when the crop
    /// is not offered.
    pub fn crop_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.crops
            .iter()
            .find(|crop| crop.eq_ignore_ascii_case(id.trim()))
            .map_or(id, String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvisoryForm {
    pub crop: String,
    pub soil: String,
    pub farm_size: String,
    pub location: String,
    pub question: String,
    pub show_advice: bool,
    pub listening: bool,
}

impl AdvisoryForm {
    pub fn can_request_advice(&self) -> bool {
        !self.crop.is_empty() && !self.soil.is_empty()
    }

    /// Reveals the advice block. Does nothing while a required selection is
    /// still missing.
    pub fn request_advice(&mut self) -> bool {
        if self.can_request_advice() {
            self.show_advice = true;
        }
        self.show_advice
    }

    pub fn advice_visible(&self) -> bool {
        self.show_advice && !self.crop.is_empty()
    }

    pub fn toggle_listening(&mut self) {
        self.listening = !self.listening;
    }

    /// Farm size in acres; anything that isn't a positive number reads as absent.
    pub fn farm_size_acres(&self) -> Option<f64> {
        self.farm_size
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }
}

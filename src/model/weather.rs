use chrono::NaiveDate;
use serde::Deserialize;

use super::advisory::Note;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u32,
    pub visibility_km: u32,
    pub pressure_hpa: u32,
    pub rainfall_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Rain,
    Storm,
    Heat,
    Cold,
    Wind,
    Drought,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Rain => "🌧",
            AlertKind::Storm => "⚡",
            AlertKind::Heat => "🌡",
            AlertKind::Wind => "💨",
            AlertKind::Cold => "❄️",
            AlertKind::Drought => "⚠️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum WeatherSeverity {
    Low,
    Medium,
    High,
    Extreme,
}

impl WeatherSeverity {
    pub fn label(self) -> &'static str {
        match self {
            WeatherSeverity::Low => "Low",
            WeatherSeverity::Medium => "Medium",
            WeatherSeverity::High => "High",
            WeatherSeverity::Extreme => "Extreme",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            WeatherSeverity::Extreme => "badge badge-extreme",
            WeatherSeverity::High => "badge badge-danger",
            WeatherSeverity::Medium => "badge badge-warning",
            WeatherSeverity::Low => "badge badge-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherAlert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: WeatherSeverity,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub impact: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u32,
    pub rainfall_mm: f64,
}

impl ForecastDay {
    pub fn shows_rainfall(&self) -> bool {
        self.rainfall_mm > 0.0
    }

    /// "Jan 15" style label.
    pub fn short_date(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherContent {
    pub current: CurrentConditions,
    pub alerts: Vec<WeatherAlert>,
    pub forecast: Vec<ForecastDay>,
    pub recommendations: Vec<Note>,
}

impl WeatherContent {
    pub fn alert(&self, id: &str) -> Option<&WeatherAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }
}

/// Icon for a free-text condition; unknown conditions show the sun.
pub fn condition_icon(condition: &str) -> &'static str {
    match condition.trim().to_lowercase().as_str() {
        "partly cloudy" => "⛅",
        "heavy rain" => "🌧",
        "thunderstorm" => "⛈",
        "hot" => "🌡",
        _ => "☀️",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSetting {
    Notifications,
    HeavyRain,
    Storms,
    ExtremeHeat,
    DayAhead,
    SixHoursAhead,
    HourAhead,
}

impl AlertSetting {
    pub const KINDS: [AlertSetting; 3] = [
        AlertSetting::HeavyRain,
        AlertSetting::Storms,
        AlertSetting::ExtremeHeat,
    ];
    pub const LEAD_TIMES: [AlertSetting; 3] = [
        AlertSetting::DayAhead,
        AlertSetting::SixHoursAhead,
        AlertSetting::HourAhead,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertSetting::Notifications => "Weather Notifications",
            AlertSetting::HeavyRain => "Heavy Rain",
            AlertSetting::Storms => "Storms & Thunder",
            AlertSetting::ExtremeHeat => "Extreme Heat",
            AlertSetting::DayAhead => "24 hours before",
            AlertSetting::SixHoursAhead => "6 hours before",
            AlertSetting::HourAhead => "1 hour before",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSettings {
    pub notifications: bool,
    pub heavy_rain: bool,
    pub storms: bool,
    pub extreme_heat: bool,
    pub day_ahead: bool,
    pub six_hours_ahead: bool,
    pub hour_ahead: bool,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            heavy_rain: true,
            storms: true,
            extreme_heat: true,
            day_ahead: true,
            six_hours_ahead: true,
            hour_ahead: false,
        }
    }
}

impl WeatherSettings {
    fn slot(&mut self, setting: AlertSetting) -> &mut bool {
        match setting {
            AlertSetting::Notifications => &mut self.notifications,
            AlertSetting::HeavyRain => &mut self.heavy_rain,
            AlertSetting::Storms => &mut self.storms,
            AlertSetting::ExtremeHeat => &mut self.extreme_heat,
            AlertSetting::DayAhead => &mut self.day_ahead,
            AlertSetting::SixHoursAhead => &mut self.six_hours_ahead,
            AlertSetting::HourAhead => &mut self.hour_ahead,
        }
    }

    pub fn get(mut self, setting: AlertSetting) -> bool {
        *self.slot(setting)
    }

    pub fn set(&mut self, setting: AlertSetting, on: bool) {
        *self.slot(setting) = on;
    }
}

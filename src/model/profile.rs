use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub farm_size: String,
    pub primary_crops: Vec<String>,
    pub experience: String,
    pub language: String,
    pub join_date: String,
}

impl ProfileRecord {
    /// First letter of each word of the name, for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FarmStats {
    pub total_queries: u32,
    pub pest_detections: u32,
    pub weather_alerts: u32,
    pub market_alerts: u32,
    pub successful_harvests: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProfileContent {
    pub profile: ProfileRecord,
    pub stats: FarmStats,
    pub support_links: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Phone,
    Email,
    Location,
    FarmSize,
    Experience,
    Language,
}

impl ProfileField {
    pub const EDITABLE: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::Location,
        ProfileField::FarmSize,
        ProfileField::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Phone => "Phone Number",
            ProfileField::Email => "Email Address",
            ProfileField::Location => "Location",
            ProfileField::FarmSize => "Farm Size",
            ProfileField::Experience => "Farming Experience",
            ProfileField::Language => "Preferred Language",
        }
    }
}

/// Profile form with edit mode. Beginning an edit snapshots the record so
/// Cancel can restore it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    profile: ProfileRecord,
    snapshot: Option<ProfileRecord>,
}

impl ProfileEditor {
    pub fn new(profile: ProfileRecord) -> Self {
        Self { profile, snapshot: None }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn begin_edit(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.profile.clone());
        }
    }

    pub fn toggle_edit(&mut self) {
        if self.is_editing() {
            self.cancel();
        } else {
            self.begin_edit();
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        let p = &self.profile;
        match field {
            ProfileField::Name => &p.name,
            ProfileField::Phone => &p.phone,
            ProfileField::Email => &p.email,
            ProfileField::Location => &p.location,
            ProfileField::FarmSize => &p.farm_size,
            ProfileField::Experience => &p.experience,
            ProfileField::Language => &p.language,
        }
    }

    /// Updates a field. Only the language can change outside edit mode; it
    /// lives in the app settings card.
    pub fn set_field(&mut self, field: ProfileField, value: String) -> bool {
        if !self.is_editing() && field != ProfileField::Language {
            return false;
        }
        let p = &mut self.profile;
        let slot = match field {
            ProfileField::Name => &mut p.name,
            ProfileField::Phone => &mut p.phone,
            ProfileField::Email => &mut p.email,
            ProfileField::Location => &mut p.location,
            ProfileField::FarmSize => &mut p.farm_size,
            ProfileField::Experience => &mut p.experience,
            ProfileField::Language => &mut p.language,
        };
        *slot = value;
        true
    }

    pub fn add_crop(&mut self, crop: &str) -> bool {
        let crop = crop.trim();
        if !self.is_editing() || crop.is_empty() {
            return false;
        }
        let exists = self
            .profile
            .primary_crops
            .iter()
            .any(|c| c.eq_ignore_ascii_case(crop));
        if exists {
            return false;
        }
        self.profile.primary_crops.push(crop.to_string());
        true
    }

    pub fn remove_crop(&mut self, index: usize) -> Option<String> {
        if !self.is_editing() || index >= self.profile.primary_crops.len() {
            return None;
        }
        Some(self.profile.primary_crops.remove(index))
    }

    pub fn save(&mut self) {
        self.snapshot = None;
    }

    pub fn cancel(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.profile = snapshot;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Weather,
    Pest,
    Market,
    Advisory,
    Sms,
    Email,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Weather,
        Channel::Pest,
        Channel::Market,
        Channel::Advisory,
        Channel::Sms,
        Channel::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Weather => "Weather Alerts",
            Channel::Pest => "Pest Warnings",
            Channel::Market => "Market Updates",
            Channel::Advisory => "Farming Tips",
            Channel::Sms => "SMS Notifications",
            Channel::Email => "Email Notifications",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Channel::Weather => "Severe weather warnings",
            Channel::Pest => "Outbreak alerts in your area",
            Channel::Market => "Price changes for your crops",
            Channel::Advisory => "Seasonal advice and reminders",
            Channel::Sms => "Receive alerts by text message",
            Channel::Email => "Weekly summary by email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub weather: bool,
    pub pest: bool,
    pub market: bool,
    pub advisory: bool,
    pub sms: bool,
    pub email: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            weather: true,
            pest: true,
            market: false,
            advisory: true,
            sms: true,
            email: false,
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::Weather => self.weather,
            Channel::Pest => self.pest,
            Channel::Market => self.market,
            Channel::Advisory => self.advisory,
            Channel::Sms => self.sms,
            Channel::Email => self.email,
        }
    }

    pub fn set(&mut self, channel: Channel, on: bool) {
        let slot = match channel {
            Channel::Weather => &mut self.weather,
            Channel::Pest => &mut self.pest,
            Channel::Market => &mut self.market,
            Channel::Advisory => &mut self.advisory,
            Channel::Sms => &mut self.sms,
            Channel::Email => &mut self.email,
        };
        *slot = on;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppPrefs {
    pub voice_commands: bool,
    pub offline_mode: bool,
    pub data_saver: bool,
}

impl Default for AppPrefs {
    fn default() -> Self {
        Self {
            voice_commands: true,
            offline_mode: false,
            data_saver: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rajesh() -> ProfileRecord {
        ProfileRecord {
            name: "Rajesh Kumar".into(),
            location: "Indore, Madhya Pradesh".into(),
            primary_crops: vec!["Rice".into(), "Wheat".into()],
            language: "Hindi".into(),
            ..Default::default()
        }
    }

    #[test]
    fn initials_from_name_words() {
        assert_eq!(rajesh().initials(), "RK");
        assert_eq!(ProfileRecord::default().initials(), "");
    }

    #[test]
    fn fields_locked_outside_edit_mode() {
        let mut editor = ProfileEditor::new(rajesh());
        assert!(!editor.set_field(ProfileField::Name, "Someone".into()));
        assert_eq!(editor.field(ProfileField::Name), "Rajesh Kumar");
        assert!(editor.set_field(ProfileField::Language, "Tamil".into()));
        assert_eq!(editor.profile().language, "Tamil");
    }

    #[test]
    fn save_keeps_edits() {
        let mut editor = ProfileEditor::new(rajesh());
        editor.begin_edit();
        editor.set_field(ProfileField::Location, "Bhopal".into());
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(editor.profile().location, "Bhopal");
    }

    #[test]
    fn cancel_restores_snapshot() {
        let mut editor = ProfileEditor::new(rajesh());
        editor.toggle_edit();
        editor.set_field(ProfileField::Name, "R. K.".into());
        assert!(editor.add_crop("Cotton"));
        editor.toggle_edit();
        assert!(!editor.is_editing());
        assert_eq!(editor.profile(), &rajesh());
    }

    #[test]
    fn crops_are_unique_and_removable() {
        let mut editor = ProfileEditor::new(rajesh());
        assert!(!editor.add_crop("Cotton"));
        editor.begin_edit();
        assert!(!editor.add_crop("rice"));
        assert!(!editor.add_crop("  "));
        assert!(editor.add_crop(" Cotton "));
        assert_eq!(editor.remove_crop(0).as_deref(), Some("Rice"));
        assert_eq!(editor.remove_crop(9), None);
        assert_eq!(editor.profile().primary_crops, ["Wheat", "Cotton"]);
    }

    #[test]
    fn notification_defaults() {
        let mut prefs = NotificationPrefs::default();
        assert!(prefs.get(Channel::Weather));
        assert!(!prefs.get(Channel::Market));
        prefs.set(Channel::Market, true);
        assert!(prefs.market);
        assert!(AppPrefs::default().voice_commands);
    }
}

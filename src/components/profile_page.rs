use dioxus::prelude::*;
use tracing::{debug, info};

use crate::components::common::{Panel, StatTile, Toggle};
use crate::components::AppContent;
use crate::model::profile::{AppPrefs, Channel, NotificationPrefs, ProfileEditor, ProfileField};

#[component]
pub fn ProfileComponent() -> Element {
    let content = use_context::<AppContent>();
    let mut editor = {
        let record = content.profile.profile.clone();
        use_signal(move || ProfileEditor::new(record))
    };
    let mut notifications = use_signal(NotificationPrefs::default);
    let mut app_prefs = use_signal(AppPrefs::default);
    let mut new_crop = use_signal(String::new);

    let state = editor.read().clone();
    let profile = state.profile();
    let editing = state.is_editing();
    let stats = content.profile.stats;
    let channels = notifications();
    let prefs = app_prefs();
    let edit_label = if editing { "✕ Cancel" } else { "✎ Edit" };

    rsx! {
        div { class: "screen animate-fade-in",
            div { class: "panel panel-hero",
                div { class: "flex items-center gap-4",
                    div { class: "avatar", "{profile.initials()}" }
                    div { class: "flex-1 min-w-0",
                        h2 { class: "text-xl font-semibold", "{profile.name}" }
                        p { class: "text-sm text-muted", "📍 {profile.location}" }
                        p { class: "text-xs text-muted", "Member since {profile.join_date}" }
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| {
                            editor.write().toggle_edit();
                            debug!(editing = editor.read().is_editing(), "profile edit toggled");
                        },
                        "{edit_label}"
                    }
                }
            }

            Panel { title: "Farm Statistics", icon: "📊",
                div { class: "grid grid-cols-2 gap-4",
                    StatTile { value: "{stats.total_queries}", label: "AI Queries" }
                    StatTile { value: "{stats.pest_detections}", label: "Pest Scans", accent: "text-orange" }
                    StatTile { value: "{stats.weather_alerts}", label: "Weather Alerts", accent: "text-blue" }
                    StatTile { value: "{stats.market_alerts}", label: "Market Alerts", accent: "text-green" }
                }
                div { class: "stat-banner",
                    span { "🏆 Successful Harvests" }
                    span { class: "font-bold", "{stats.successful_harvests}" }
                }
            }

            Panel { title: "Personal Information", icon: "👤",
                div { class: "space-y-3",
                    for field in ProfileField::EDITABLE {
                        div { key: "{field.label()}", class: "field",
                            label { "{field.label()}" }
                            if editing {
                                input {
                                    class: "input",
                                    value: "{state.field(field)}",
                                    oninput: move |evt| {
                                        editor.write().set_field(field, evt.value());
                                    },
                                }
                            } else {
                                p { class: "field-value", "{state.field(field)}" }
                            }
                        }
                    }
                }

                div { class: "field mt-4",
                    label { "Primary Crops" }
                    div { class: "flex flex-wrap gap-2",
                        for (index, crop) in profile.primary_crops.iter().enumerate() {
                            span { key: "{crop}", class: "badge badge-secondary",
                                "{crop}"
                                if editing {
                                    button {
                                        class: "chip-remove",
                                        "aria-label": "Remove crop",
                                        onclick: move |_| {
                                            if let Some(removed) = editor.write().remove_crop(index) {
                                                debug!(crop = %removed, "crop removed");
                                            }
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                    if editing {
                        div { class: "flex gap-2 mt-2",
                            input {
                                class: "input flex-1",
                                placeholder: "Add a crop",
                                value: "{new_crop}",
                                oninput: move |evt| new_crop.set(evt.value()),
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| {
                                    if editor.write().add_crop(&new_crop.read()) {
                                        new_crop.set(String::new());
                                    }
                                },
                                "+ Add"
                            }
                        }
                    }
                }

                if editing {
                    div { class: "flex gap-2 mt-4",
                        button {
                            class: "btn btn-primary flex-1",
                            onclick: move |_| {
                                editor.write().save();
                                info!("profile saved");
                            },
                            "Save Changes"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| editor.write().cancel(),
                            "Cancel"
                        }
                    }
                }
            }

            Panel { title: "Notifications", icon: "🔔",
                for channel in Channel::ALL {
                    Toggle {
                        key: "{channel.label()}",
                        label: "{channel.label()}",
                        description: "{channel.description()}",
                        on: channels.get(channel),
                        ontoggle: move |on| notifications.write().set(channel, on),
                    }
                }
            }

            Panel { title: "App Settings", icon: "⚙️",
                div { class: "field",
                    label { r#for: "profile-language", "{ProfileField::Language.label()}" }
                    select {
                        id: "profile-language",
                        value: "{profile.language}",
                        onchange: move |evt| {
                            let language = evt.value();
                            info!(language = %language, "preferred language changed");
                            editor.write().set_field(ProfileField::Language, language);
                        },
                        for language in content.languages.iter() {
                            option { key: "{language.code}", value: "{language.name}", "{language.native} ({language.name})" }
                        }
                    }
                }
                Toggle {
                    label: "Voice Commands",
                    description: "Ask questions by speaking",
                    on: prefs.voice_commands,
                    ontoggle: move |on| app_prefs.write().voice_commands = on,
                }
                Toggle {
                    label: "Offline Mode",
                    description: "Keep recent advice available without network",
                    on: prefs.offline_mode,
                    ontoggle: move |on| app_prefs.write().offline_mode = on,
                }
                Toggle {
                    label: "Data Saver",
                    description: "Load lower quality images",
                    on: prefs.data_saver,
                    ontoggle: move |on| app_prefs.write().data_saver = on,
                }
            }

            Panel { title: "Help & Support", icon: "❓",
                div { class: "space-y-2",
                    for link in content.profile.support_links.iter() {
                        button { key: "{link}", class: "link-row",
                            span { "{link}" }
                            span { class: "text-muted", "›" }
                        }
                    }
                }
            }

            p { class: "text-center text-xs text-muted", "{content.settings.title} v{content.settings.version}" }
        }
    }
}

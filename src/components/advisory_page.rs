use dioxus::prelude::*;
use tracing::{debug, info};

use crate::components::common::{CheckList, Panel};
use crate::components::AppContent;
use crate::model::advisory::AdvisoryForm;

#[component]
pub fn AdvisoryComponent() -> Element {
    let content = use_context::<AppContent>();
    let mut form = use_signal(AdvisoryForm::default);

    let current = form.read().clone();
    let advisory = &content.advisory;
    let lookup = if current.advice_visible() {
        advisory.advice_for(&current.crop)
    } else {
        None
    };
    let listen_class = if current.listening { "btn btn-danger" } else { "btn btn-outline" };
    let listen_text = if current.listening { "🎤 Listening..." } else { "🎤 Voice Input" };

    rsx! {
        div { class: "screen animate-fade-in",
            Panel { title: "Farm Information", icon: "🌱",
                div { class: "form-grid",
                    div { class: "field",
                        label { r#for: "crop-select", "Crop Type" }
                        select {
                            id: "crop-select",
                            value: "{current.crop}",
                            onchange: move |evt| form.write().crop = evt.value(),
                            option { value: "", disabled: true, "Select your crop" }
                            for crop in advisory.crops.iter() {
                                option { key: "{crop}", value: "{crop.to_lowercase()}", "{crop}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "soil-select", "Soil Type" }
                        select {
                            id: "soil-select",
                            value: "{current.soil}",
                            onchange: move |evt| form.write().soil = evt.value(),
                            option { value: "", disabled: true, "Select soil type" }
                            for soil in advisory.soils.iter() {
                                option { key: "{soil}", value: "{soil.to_lowercase()}", "{soil}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "farm-size", "Farm Size (acres)" }
                        input {
                            id: "farm-size",
                            r#type: "number",
                            placeholder: "Enter farm size",
                            value: "{current.farm_size}",
                            oninput: move |evt| form.write().farm_size = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { r#for: "location", "Location" }
                        input {
                            id: "location",
                            placeholder: "Enter your location",
                            value: "{current.location}",
                            oninput: move |evt| form.write().location = evt.value(),
                        }
                    }
                }
            }

            Panel { title: "Ask Your Question", icon: "💬",
                textarea {
                    class: "textarea",
                    placeholder: "Ask about irrigation, fertilizers, pest control, or any farming question...",
                    value: "{current.question}",
                    oninput: move |evt| form.write().question = evt.value(),
                }
                div { class: "flex gap-2 mt-4",
                    button {
                        class: "{listen_class}",
                        onclick: move |_| {
                            form.write().toggle_listening();
                            debug!(listening = form.read().listening, "voice input toggled");
                        },
                        "{listen_text}"
                    }
                    button {
                        class: "btn btn-primary flex-1",
                        disabled: !current.can_request_advice(),
                        onclick: move |_| {
                            let mut form = form.write();
                            if form.request_advice() {
                                info!(
                                    crop = %form.crop,
                                    soil = %form.soil,
                                    acres = ?form.farm_size_acres(),
                                    "advice requested"
                                );
                            }
                        },
                        "Get AI Advice"
                    }
                }
            }

            if let Some(lookup) = lookup {
                {
                    let entry = lookup.entry();
                    let crop_name = advisory.crop_label(&current.crop);
                    let badge = if lookup.is_fallback() { "General advice" } else { "AI Recommended" };
                    rsx! {
                        Panel {
                            title: "Personalized Advice",
                            icon: "🤖",
                            badge: badge.to_string(),
                            class: "panel-accent",
                            div { class: "advice-block advice-blue",
                                h3 { "💧 Irrigation" }
                                p { "{entry.irrigation}" }
                            }
                            div { class: "advice-block advice-green",
                                h3 { "🌱 Fertilizer" }
                                p { "{entry.fertilizer}" }
                            }
                            div { class: "advice-block advice-orange",
                                h3 { "🐛 Pest Control" }
                                p { "{entry.pest_control}" }
                            }
                            div { class: "advice-block",
                                h3 { "📋 Best Practices for {crop_name}" }
                                CheckList { items: entry.best_practices.clone() }
                            }
                        }
                    }
                }
            }

            Panel { title: "Weather-Based Recommendations", icon: "🌦",
                div { class: "space-y-3",
                    for note in advisory.weather_notes.iter() {
                        div { key: "{note.heading}", class: "note",
                            p { class: "font-medium", "{note.heading}" }
                            p { class: "text-sm text-muted", "{note.text}" }
                        }
                    }
                }
            }
        }
    }
}

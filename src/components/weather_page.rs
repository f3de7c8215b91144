use dioxus::prelude::*;
use tracing::debug;

use crate::components::common::{Panel, Toggle};
use crate::components::AppContent;
use crate::model::weather::{condition_icon, AlertSetting, WeatherSettings};

#[component]
pub fn WeatherComponent() -> Element {
    let content = use_context::<AppContent>();
    let mut settings = use_signal(WeatherSettings::default);
    let mut open_alert = use_signal(|| None::<String>);

    let weather = &content.weather;
    let current = &weather.current;
    let prefs = settings();
    let detail = open_alert.read().as_deref().and_then(|id| weather.alert(id)).cloned();

    rsx! {
        div { class: "screen animate-fade-in",
            div { class: "panel panel-weather",
                div { class: "flex items-center justify-between",
                    div {
                        p { class: "text-sm opacity-80", "📍 Current Location" }
                        div { class: "text-5xl font-bold", "{current.temperature}°C" }
                        p { class: "opacity-90", "Feels like {current.feels_like}°C" }
                    }
                    div { class: "text-right",
                        div { class: "text-5xl", "{condition_icon(&current.condition)}" }
                        p { class: "font-medium", "{current.condition}" }
                    }
                }
                div { class: "grid grid-cols-2 gap-4 mt-4",
                    div { class: "metric", span { "💧 Humidity" } span { class: "font-medium", "{current.humidity}%" } }
                    div { class: "metric", span { "💨 Wind" } span { class: "font-medium", "{current.wind_speed} km/h" } }
                    div { class: "metric", span { "👁 Visibility" } span { class: "font-medium", "{current.visibility_km} km" } }
                    div { class: "metric", span { "🌡 Pressure" } span { class: "font-medium", "{current.pressure_hpa} hPa" } }
                }
            }

            if !weather.alerts.is_empty() {
                Panel { title: "Weather Alerts", icon: "⚠️", badge: "{weather.alerts.len()}",
                    div { class: "space-y-3",
                        for alert in weather.alerts.iter() {
                            {
                                let id = alert.id.clone();
                                rsx! {
                                    button {
                                        key: "{alert.id}",
                                        class: "alert-card",
                                        onclick: move |_| {
                                            debug!(alert = %id, "weather alert opened");
                                            open_alert.set(Some(id.clone()));
                                        },
                                        span { class: "text-2xl", "{alert.kind.icon()}" }
                                        div { class: "flex-1 min-w-0 text-left",
                                            div { class: "flex items-center gap-2",
                                                span { class: "font-semibold", "{alert.title}" }
                                                span { class: "{alert.severity.badge_class()}", "{alert.severity.label()}" }
                                            }
                                            p { class: "text-sm text-muted", "{alert.description}" }
                                            p { class: "text-xs text-muted", "{alert.start_time} → {alert.end_time}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Panel { title: "5-Day Forecast", icon: "📅",
                div { class: "space-y-2",
                    for day in weather.forecast.iter() {
                        div { key: "{day.date}", class: "forecast-row",
                            div { class: "w-20",
                                p { class: "font-medium", "{day.day}" }
                                p { class: "text-xs text-muted", "{day.short_date()}" }
                            }
                            span { class: "text-2xl", "{condition_icon(&day.condition)}" }
                            div { class: "flex-1 min-w-0",
                                p { class: "text-sm", "{day.condition}" }
                                p { class: "text-xs text-muted",
                                    "💧 {day.humidity}% • 💨 {day.wind_speed} km/h"
                                    if day.shows_rainfall() {
                                        " • 🌧 {day.rainfall_mm}mm"
                                    }
                                }
                            }
                            div { class: "text-right",
                                span { class: "font-semibold", "{day.high}°" }
                                span { class: "text-muted", " / {day.low}°" }
                            }
                        }
                    }
                }
            }

            Panel { title: "Farming Recommendations", icon: "🌾",
                div { class: "space-y-3",
                    for note in weather.recommendations.iter() {
                        div { key: "{note.heading}", class: "note",
                            p { class: "font-medium", "{note.heading}" }
                            p { class: "text-sm text-muted", "{note.text}" }
                        }
                    }
                }
            }

            Panel { title: "Alert Settings", icon: "🔔",
                Toggle {
                    label: "{AlertSetting::Notifications.label()}",
                    description: "Receive alerts for severe weather",
                    on: prefs.notifications,
                    ontoggle: move |on| settings.write().set(AlertSetting::Notifications, on),
                }
                if prefs.notifications {
                    h4 { class: "settings-heading", "Alert Types" }
                    for setting in AlertSetting::KINDS {
                        Toggle {
                            key: "{setting.label()}",
                            label: "{setting.label()}",
                            on: prefs.get(setting),
                            ontoggle: move |on| settings.write().set(setting, on),
                        }
                    }
                    h4 { class: "settings-heading", "Alert Timing" }
                    for setting in AlertSetting::LEAD_TIMES {
                        Toggle {
                            key: "{setting.label()}",
                            label: "{setting.label()}",
                            on: prefs.get(setting),
                            ontoggle: move |on| settings.write().set(setting, on),
                        }
                    }
                }
            }

            if let Some(alert) = detail {
                div { class: "modal-backdrop", onclick: move |_| open_alert.set(None),
                    div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                        div { class: "flex items-center gap-3",
                            span { class: "text-3xl", "{alert.kind.icon()}" }
                            div {
                                h3 { class: "text-lg font-semibold", "{alert.title}" }
                                span { class: "{alert.severity.badge_class()}", "{alert.severity.label()} severity" }
                            }
                        }
                        p { class: "mt-4", "{alert.description}" }
                        div { class: "grid grid-cols-2 gap-4 mt-4 text-sm",
                            div { p { class: "text-muted", "Starts" } p { class: "font-medium", "{alert.start_time}" } }
                            div { p { class: "text-muted", "Ends" } p { class: "font-medium", "{alert.end_time}" } }
                        }
                        div { class: "advice-block advice-orange",
                            h4 { "Impact on Crops" }
                            p { "{alert.impact}" }
                        }
                        div { class: "advice-block advice-green",
                            h4 { "Recommended Action" }
                            p { "{alert.recommendation}" }
                        }
                        button {
                            class: "btn btn-primary w-full mt-4",
                            onclick: move |_| open_alert.set(None),
                            "Got it"
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::common::{Panel, ProgressBar};
use crate::components::AppContent;
use crate::model::home::QUICK_ACTIONS;
use crate::model::Tab;

/// Landing screen. Its quick actions switch tabs through `on_navigate`,
/// handed down by the shell.
#[component]
pub fn HomeComponent(on_navigate: EventHandler<Tab>) -> Element {
    let content = use_context::<AppContent>();
    let weather = &content.weather.current;
    let health = &content.home.crop_health;

    rsx! {
        div { class: "screen animate-fade-in",
            // Welcome
            div { class: "panel panel-hero",
                div { class: "flex items-center gap-4",
                    div { class: "hero-icon", "🌿" }
                    div { class: "min-w-0 flex-1",
                        h2 { class: "text-xl font-semibold", "Welcome, Farmer!" }
                        p { class: "text-muted", "Your crops are looking healthy today" }
                    }
                }
            }

            // Quick actions
            div { class: "grid grid-cols-2 gap-4",
                for action in QUICK_ACTIONS {
                    button {
                        key: "{action.target}",
                        class: "quick-action",
                        onclick: move |_| on_navigate.call(action.target),
                        span { class: "text-3xl", "{action.icon}" }
                        span { class: "font-medium", "{action.label}" }
                    }
                }
            }

            Panel { title: "Today's Weather", icon: "☀️", badge: "📍 Current Location",
                div { class: "flex items-center justify-between",
                    div { class: "text-4xl font-bold", "{weather.temperature}°C" }
                    div { class: "text-muted", "{weather.condition}" }
                }
                div { class: "grid grid-cols-3 gap-4 mt-4",
                    div { class: "metric",
                        span { "💧" }
                        span { class: "font-medium", "{weather.humidity}%" }
                        span { class: "text-sm text-muted", "Humidity" }
                    }
                    div { class: "metric",
                        span { "💨" }
                        span { class: "font-medium", "{weather.wind_speed} km/h" }
                        span { class: "text-sm text-muted", "Wind" }
                    }
                    div { class: "metric",
                        span { "🌡" }
                        span { class: "font-medium", "{weather.rainfall_mm}mm" }
                        span { class: "text-sm text-muted", "Rainfall" }
                    }
                }
            }

            Panel { title: "Crop Health Status", icon: "🌿",
                div { class: "flex justify-between",
                    span { "Overall Health" }
                    span { class: "font-medium", "{health.overall}%" }
                }
                ProgressBar { percent: health.overall }
                div { class: "space-y-3 mt-4",
                    div { class: "row-muted",
                        span { "💧 Irrigation" }
                        span { class: "badge badge-success", "{health.irrigation}" }
                    }
                    div { class: "row-muted",
                        span { "🌱 Fertilizer" }
                        span { class: "badge badge-outline", "⏱ {health.fertilizer}" }
                    }
                    div { class: "row-muted",
                        span { "🐛 Pest Risk" }
                        span { class: "badge badge-success", "{health.pest_risk}" }
                    }
                }
            }

            Panel { title: "Market Prices (₹/Quintal)", icon: "💰",
                div { class: "space-y-3",
                    for item in content.home.prices.iter() {
                        {
                            let (trend_class, arrow) = if item.is_rising() {
                                ("trend-chip trend-up", "▲")
                            } else {
                                ("trend-chip trend-down", "▼")
                            };
                            let change = item.change.abs();
                            rsx! {
                                div { key: "{item.crop}", class: "row-muted",
                                    span { class: "font-medium text-lg", "{item.crop}" }
                                    div { class: "flex items-center gap-4",
                                        span { class: "font-bold text-xl", "₹{item.price}" }
                                        span { class: "{trend_class}", "{arrow} {change}%" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Panel { title: "Important Alerts", icon: "⚠️",
                div { class: "space-y-3",
                    for (i, alert) in content.home.alerts.iter().enumerate() {
                        div { key: "{i}", class: "alert-row",
                            span { class: "{alert.priority.dot_class()}" }
                            div { class: "flex-1 min-w-0",
                                p { "{alert.message}" }
                                p { class: "text-sm text-muted capitalize",
                                    "{alert.kind} • {alert.priority.label()} priority"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

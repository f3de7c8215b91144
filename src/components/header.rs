use dioxus::prelude::*;
use tracing::debug;

use crate::components::AppContent;
use crate::model::header::HeaderState;
use crate::model::tab::nav_entries;
use crate::model::Tab;

#[component]
pub fn HeaderComponent(title: String, active: Tab, on_select: EventHandler<Tab>) -> Element {
    let content = use_context::<AppContent>();
    let mut header = use_signal(|| {
        HeaderState::new(
            content.settings.default_language.clone(),
            content.settings.notification_count,
        )
    });
    let mut language_open = use_signal(|| false);

    let state = header.read().clone();
    let current = state
        .current_language(&content.languages)
        .map(|l| l.native.clone())
        .unwrap_or_default();

    rsx! {
        header { class: "app-header",
            div { class: "header-row",
                div { class: "flex items-center gap-3",
                    button {
                        class: "icon-btn",
                        "aria-label": "Menu",
                        onclick: move |_| header.write().toggle_menu(),
                        "☰"
                    }
                    h1 { class: "header-title", "{title}" }
                }

                div { class: "flex items-center gap-2",
                    button {
                        class: "pill-btn",
                        onclick: move |_| language_open.set(!language_open()),
                        span { "🌐" }
                        span { class: "text-sm font-medium", "{current}" }
                    }
                    button { class: "icon-btn relative", "aria-label": "Notifications",
                        "🔔"
                        if let Some(count) = state.badge_text() {
                            span { class: "notification-badge", "{count}" }
                        }
                    }
                }
            }

            if state.menu_open {
                nav { class: "drawer-menu",
                    for entry in nav_entries(active) {
                        {
                            let item_class = if entry.active { "drawer-item active" } else { "drawer-item" };
                            let tab = entry.tab;
                            rsx! {
                                button {
                                    key: "{tab}",
                                    class: "{item_class}",
                                    onclick: move |_| {
                                        let chosen = header.write().choose(tab);
                                        on_select.call(chosen);
                                    },
                                    span { class: "text-xl", "{tab.icon()}" }
                                    span { class: "font-medium", "{tab.menu_label()}" }
                                }
                            }
                        }
                    }
                }
            }

            if language_open() {
                div { class: "language-menu",
                    for language in content.languages.iter() {
                        {
                            let selected = language.code == state.language;
                            let item_class = if selected { "language-item active" } else { "language-item" };
                            let code = language.code.clone();
                            rsx! {
                                button {
                                    key: "{language.code}",
                                    class: "{item_class}",
                                    onclick: move |_| {
                                        header.write().select_language(&code);
                                        language_open.set(false);
                                        debug!(language = %code, "language selected");
                                    },
                                    span { class: "font-medium", "{language.native}" }
                                    span { class: "text-sm text-muted", "{language.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

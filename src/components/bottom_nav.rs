use dioxus::prelude::*;

use crate::model::tab::nav_entries;
use crate::model::Tab;

#[component]
pub fn BottomNavComponent(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "bottom-nav",
            div { class: "bottom-nav-row",
                for entry in nav_entries(active) {
                    {
                        let tab = entry.tab;
                        let item_class = if entry.active { "nav-item active" } else { "nav-item" };
                        let aria_current = if entry.active { "page" } else { "false" };
                        rsx! {
                            button {
                                key: "{tab}",
                                id: "nav-{tab}",
                                class: "{item_class}",
                                "aria-current": aria_current,
                                onclick: move |_| on_select.call(tab),
                                span { class: "nav-icon", "{tab.icon()}" }
                                span { class: "nav-label", "{tab.short_label()}" }
                            }
                        }
                    }
                }
            }
            div { class: "home-indicator" }
        }
    }
}

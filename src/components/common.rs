use dioxus::prelude::*;

/// Titled panel used by every screen.
#[component]
pub fn Panel(
    title: String,
    icon: String,
    badge: Option<String>,
    class: Option<String>,
    children: Element,
) -> Element {
    let extra_class = class.unwrap_or_default();

    rsx! {
        div { class: "panel {extra_class}",
            div { class: "panel-header",
                h2 { class: "panel-title",
                    span { class: "panel-icon", "{icon}" }
                    "{title}"
                }
                if let Some(text) = badge {
                    span { class: "badge badge-outline ml-auto", "{text}" }
                }
            }
            {children}
        }
    }
}

/// Round on/off switch. Reports the flipped value.
#[component]
pub fn Toggle(
    label: String,
    description: Option<String>,
    on: bool,
    ontoggle: EventHandler<bool>,
) -> Element {
    let track_class = if on { "switch switch-on" } else { "switch" };

    rsx! {
        div { class: "setting-row",
            div { class: "flex-1 min-w-0",
                p { class: "font-medium", "{label}" }
                if let Some(text) = description {
                    p { class: "text-sm text-muted", "{text}" }
                }
            }
            button {
                class: "{track_class}",
                role: "switch",
                "aria-checked": "{on}",
                onclick: move |_| ontoggle.call(!on),
                span { class: "switch-thumb" }
            }
        }
    }
}

/// Bulleted list with check marks.
#[component]
pub fn CheckList(items: Vec<String>) -> Element {
    rsx! {
        ul { class: "check-list",
            for (i, item) in items.iter().enumerate() {
                li { key: "{i}",
                    span { class: "check-mark", "✓" }
                    span { "{item}" }
                }
            }
        }
    }
}

#[component]
pub fn StatTile(value: String, label: String, accent: Option<String>) -> Element {
    let accent = accent.unwrap_or_else(|| "text-primary".to_string());

    rsx! {
        div { class: "stat-tile",
            div { class: "stat-value {accent}", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn ProgressBar(percent: u8) -> Element {
    let width = percent.min(100);

    rsx! {
        div { class: "progress",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::components::common::{Panel, StatTile};
use crate::components::AppContent;
use crate::model::market::{
    distinct, top_gainers, top_losers, AlertBoard, AlertDirection, AlertDraft, MarketFilter,
};

const INSIGHT_LIMIT: usize = 3;

fn selection(value: String) -> Option<String> {
    if value == "all" {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn MarketComponent() -> Element {
    let content = use_context::<AppContent>();
    let mut filter = use_signal(MarketFilter::default);
    let mut board = {
        let seed = content.market.alerts.clone();
        use_signal(move || AlertBoard::new(seed))
    };
    let mut draft = use_signal(AlertDraft::default);
    let mut show_alert_form = use_signal(|| false);

    let market = &content.market;
    let crops = distinct(&market.rows, |r| r.crop.as_str());
    let markets = distinct(&market.rows, |r| r.market.as_str());
    let current_filter = filter.read().clone();
    let rows = current_filter.apply(&market.rows);
    let gainers = top_gainers(&market.rows, INSIGHT_LIMIT);
    let losers = top_losers(&market.rows, INSIGHT_LIMIT);
    let alert_board = board.read().clone();
    let current_draft = draft.read().clone();

    let on_add_alert = {
        let content = content.clone();
        move |_: MouseEvent| {
            let mut draft = draft.write();
            let mut board = board.write();
            match board.add(&mut draft, &content.market.rows) {
                Some(alert) => {
                    info!(
                        id = alert.id,
                        crop = %alert.crop,
                        target = alert.target_price,
                        "price alert added"
                    );
                    show_alert_form.set(false);
                }
                None => {
                    warn!(crop = %draft.crop, target = %draft.target, "price alert draft rejected")
                }
            }
        }
    };

    rsx! {
        div { class: "screen animate-fade-in",
            div { class: "grid grid-cols-2 gap-4",
                StatTile { value: "{markets.len()}", label: "Markets tracked" }
                StatTile { value: "{alert_board.active_count()}", label: "Active alerts", accent: "text-orange" }
            }

            Panel { title: "Filter Prices", icon: "🔍",
                input {
                    class: "input",
                    placeholder: "Search crops...",
                    value: "{current_filter.search}",
                    oninput: move |evt| filter.write().search = evt.value(),
                }
                div { class: "grid grid-cols-2 gap-2 mt-2",
                    select {
                        value: current_filter.crop.clone().unwrap_or_else(|| "all".to_string()),
                        onchange: move |evt| filter.write().crop = selection(evt.value()),
                        option { value: "all", "All Crops" }
                        for crop in crops.iter() {
                            option { key: "{crop}", value: "{crop}", "{crop}" }
                        }
                    }
                    select {
                        value: current_filter.market.clone().unwrap_or_else(|| "all".to_string()),
                        onchange: move |evt| filter.write().market = selection(evt.value()),
                        option { value: "all", "All Markets" }
                        for name in markets.iter() {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
            }

            Panel { title: "Current Prices", icon: "💰", badge: "{rows.len()} results",
                if rows.is_empty() {
                    p { class: "text-muted text-center", "No prices match the current filter." }
                }
                div { class: "space-y-3",
                    for (i, row) in rows.iter().enumerate() {
                        div { key: "{i}", class: "price-card",
                            div { class: "flex items-center justify-between",
                                div {
                                    h3 { class: "font-semibold",
                                        "{row.crop}"
                                        if let Some(variety) = &row.variety {
                                            span { class: "text-sm text-muted", " ({variety})" }
                                        }
                                    }
                                    p { class: "text-sm text-muted", "📍 {row.market}" }
                                }
                                div { class: "text-right",
                                    p { class: "text-xl font-bold", "₹{row.price}" }
                                    p { class: "text-xs text-muted", "per {row.unit}" }
                                }
                            }
                            div { class: "flex items-center justify-between mt-2 text-sm",
                                span { class: "{row.trend().text_class()}",
                                    "{row.trend().icon()} {row.change_text()} (₹{row.absolute_change()})"
                                }
                                span { class: "{row.quality.badge_class()}", "{row.quality.label()}" }
                                span { class: "text-muted", "{row.date}" }
                            }
                        }
                    }
                }
            }

            Panel { title: "Price Alerts", icon: "🔔", badge: "{alert_board.active_count()} active",
                div { class: "space-y-3",
                    for alert in alert_board.alerts().iter() {
                        {
                            let id = alert.id;
                            let status_class = if alert.is_reached() { "text-green font-medium" } else { "text-muted" };
                            let card_class = if alert.active { "alert-card" } else { "alert-card inactive" };
                            rsx! {
                                div { key: "{id}", class: "{card_class}",
                                    div { class: "flex-1 min-w-0",
                                        p { class: "font-medium",
                                            "{alert.crop} {alert.direction.id()} ₹{alert.target_price}"
                                        }
                                        p { class: "text-sm text-muted", "Current: ₹{alert.current_price}" }
                                        p { class: "text-sm {status_class}", "{alert.status().text()}" }
                                    }
                                    button {
                                        class: "btn btn-outline btn-sm",
                                        onclick: move |_| {
                                            if let Some(active) = board.write().toggle(id) {
                                                info!(id, active, "price alert toggled");
                                            }
                                        },
                                        if alert.active { "Pause" } else { "Resume" }
                                    }
                                }
                            }
                        }
                    }
                }

                if show_alert_form() {
                    div { class: "alert-form",
                        select {
                            value: "{current_draft.crop}",
                            onchange: move |evt| draft.write().crop = evt.value(),
                            option { value: "", disabled: true, "Select crop" }
                            for crop in crops.iter() {
                                option { key: "{crop}", value: "{crop}", "{crop}" }
                            }
                        }
                        input {
                            class: "input",
                            r#type: "number",
                            placeholder: "Target price (₹)",
                            value: "{current_draft.target}",
                            oninput: move |evt| draft.write().target = evt.value(),
                        }
                        select {
                            value: "{current_draft.direction.id()}",
                            onchange: move |evt| draft.write().direction = AlertDirection::from_id(&evt.value()),
                            option { value: "above", "Price goes above" }
                            option { value: "below", "Price goes below" }
                        }
                        div { class: "flex gap-2",
                            button {
                                class: "btn btn-primary flex-1",
                                disabled: !current_draft.can_submit(),
                                onclick: on_add_alert,
                                "Add Alert"
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| show_alert_form.set(false),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    button {
                        class: "btn btn-outline w-full mt-4",
                        onclick: move |_| show_alert_form.set(true),
                        "+ Add Price Alert"
                    }
                }
            }

            Panel { title: "Market Insights", icon: "📈",
                div { class: "grid grid-cols-2 gap-4",
                    div {
                        h4 { class: "text-green font-medium", "▲ Top Gainers" }
                        for row in gainers.iter() {
                            p { key: "{row.crop}-{row.market}", class: "text-sm",
                                "{row.crop} "
                                span { class: "text-green", "{row.change_text()}" }
                            }
                        }
                    }
                    div {
                        h4 { class: "text-red font-medium", "▼ Top Losers" }
                        for row in losers.iter() {
                            p { key: "{row.crop}-{row.market}", class: "text-sm",
                                "{row.crop} "
                                span { class: "text-red", "{row.change_text()}" }
                            }
                        }
                    }
                }
                if !market.summary.is_empty() {
                    p { class: "note mt-4", "💡 {market.summary}" }
                }
            }
        }
    }
}

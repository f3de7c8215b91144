use dioxus::prelude::*;
use tracing::{debug, info};

use crate::components::advisory_page::AdvisoryComponent;
use crate::components::bottom_nav::BottomNavComponent;
use crate::components::header::HeaderComponent;
use crate::components::home_page::HomeComponent;
use crate::components::market_page::MarketComponent;
use crate::components::pest_page::PestComponent;
use crate::components::profile_page::ProfileComponent;
use crate::components::weather_page::WeatherComponent;
use crate::components::AppContent;
use crate::model::shell::ShellState;
use crate::model::Tab;

/// Root composer. Owns the active tab; the header and bottom navigation only
/// report selections back through `on_select`.
///
/// `tab` comes from the `?tab=` query parameter and is read once, on mount.
#[component]
pub fn ShellComponent(tab: String) -> Element {
    let content = use_context::<AppContent>();
    let mut shell = use_signal(|| {
        let state = ShellState::from_deep_link(Some(&tab));
        info!(requested = %tab, resolved = %state.active_tab(), "initial tab");
        state
    });

    use_effect(move || {
        spawn(async move {
            let standalone = detect_standalone().await;
            shell.write().mark_standalone(standalone);
            info!(standalone, "display mode checked");
        });
    });

    let on_select = use_callback(move |tab: Tab| {
        let active = shell.write().set_active_tab(tab.id());
        info!(tab = %active, "tab changed");
    });

    let state = *shell.read();
    let active = state.active_tab();
    let title = content.settings.title.clone();
    let shell_class = if state.is_standalone() { "app-shell standalone" } else { "app-shell" };

    rsx! {
        div { class: "{shell_class}",
            HeaderComponent { title: title, active: active, on_select: on_select }
            main { class: "page-container",
                {render_screen(active, on_select)}
            }
            BottomNavComponent { active: active, on_select: on_select }
        }
    }
}

/// Paths other than `/` open the shell on Home.
#[component]
pub fn ShellFallback(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "unknown path, opening home");
    rsx! {
        ShellComponent { tab: String::new() }
    }
}

/// View registry: one screen per tab. Switching tabs mounts the new screen
/// fresh, so screen-local state never survives a switch.
fn render_screen(tab: Tab, on_navigate: EventHandler<Tab>) -> Element {
    match tab {
        Tab::Home => rsx! { HomeComponent { on_navigate: on_navigate } },
        Tab::Advisory => rsx! { AdvisoryComponent {} },
        Tab::Pest => rsx! { PestComponent {} },
        Tab::Weather => rsx! { WeatherComponent {} },
        Tab::Market => rsx! { MarketComponent {} },
        Tab::Profile => rsx! { ProfileComponent {} },
    }
}

async fn detect_standalone() -> bool {
    let eval = document::eval("return window.matchMedia('(display-mode: standalone)').matches;");
    match eval.join::<bool>().await {
        Ok(standalone) => standalone,
        Err(e) => {
            debug!(error = ?e, "display mode query failed");
            false
        }
    }
}

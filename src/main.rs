mod components;
mod config;
mod content;
mod model;

use components::shell::{ShellComponent, ShellFallback};
use components::AppContent;
use content::Content;

use dioxus::prelude::*;
use tracing::{error, info, Level};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    // `/?tab=weather` opens straight on a tab.
    #[route("/?:tab")]
    ShellComponent { tab: String },
    // Any other path still lands on the shell.
    #[route("/:..segments")]
    ShellFallback { segments: Vec<String> },
}

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {:?}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let content = match Content::embedded() {
            Ok(content) => content,
            Err(e) => {
                error!(error = %e, "bundled content is invalid, starting empty");
                Content::default()
            }
        };
        info!(version = %content.settings.version, "content loaded");
        AppContent::new(content)
    });

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_query_reaches_the_shell() {
        let route = "/?tab=weather".parse::<Route>();
        assert!(matches!(route, Ok(Route::ShellComponent { tab }) if tab == "weather"));
    }

    #[test]
    fn unknown_path_falls_back_to_the_shell() {
        let route = "/some/where".parse::<Route>();
        assert!(matches!(
            route,
            Ok(Route::ShellFallback { segments }) if segments == ["some", "where"]
        ));
    }
}

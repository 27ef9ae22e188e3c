use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::reporter::{LogReporter, Reporter};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state shared by the shell.
    provide_context(AppGlobalContext::new());

    // Every view reads its endpoints and defaults from the same config.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid dashboard configuration, using defaults: {}", e);
            Default::default()
        }
    };
    provide_context(config);

    // Views report fetch/mutation events here instead of logging directly.
    provide_context(Reporter::new(LogReporter));

    view! {
        <AppRoutes />
    }
}

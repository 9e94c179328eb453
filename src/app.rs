//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::util::UTIL;

/// Root component mounted into `#app`.
///
/// `port`, `host` and `version` are fixed at construction; the component
/// never re-reads them from the page.
#[component]
pub fn App(port: String, host: String, version: String) -> impl IntoView {
    provide_meta_context();

    let layout_class = if UTIL.is_mobile() { "app app--mobile" } else { "app" };
    let config = AppConfig { port, host, version };

    view! {
        <Title text="Planet Tracker"/>
        <div class=layout_class>
            <h1 class="app__title">"Planet Tracker"</h1>
            <footer class="app__footer">
                <span class="app__server">{config.server_address()}</span>
                <span class="app__divider">"|"</span>
                <span class="app__version">{format!("v{}", config.version)}</span>
            </footer>
        </div>
    }
}

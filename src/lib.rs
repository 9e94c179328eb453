//! # planet-tracker
//!
//! Leptos + WASM bootstrap for the Planet Tracker front end.
//!
//! The crate mounts a single root component into the page's `#app` element,
//! seeds it with the backend port, the page host, and the release version,
//! and publishes the mounted handle so it can be inspected from a console.
//! It also carries the small angle and viewport helpers shared by the UI.
//!
//! Everything that touches the browser is gated behind the `csr` feature.
//! Without it the browser accessors fall back to neutral values so the
//! crate builds and tests on the host.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod page;
pub mod util;

pub use bootstrap::{AppHandle, Bootstrap, HandleSlot, MountedApp, Mounter};
pub use config::AppConfig;
pub use error::BootError;
pub use page::{BrowserPage, Page, StaticPage};
pub use util::{UTIL, Util, Value};

/// WASM entry point: install the panic hook and logger, then mount the app.
///
/// Mount failures are returned to the JS loader as-is.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    bootstrap::init()?;
    Ok(())
}

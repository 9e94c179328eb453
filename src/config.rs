//! Configuration handed to the mounted app at construction.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::page::Page;

/// Backend port the UI addresses. Fixed at build time.
pub const DEFAULT_PORT: &str = "5000";

/// Release version shown in the UI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Name of the `window` property that exposes the mounted app.
pub const GLOBAL_HANDLE: &str = "app";

/// Initial data for the root component. Built once per mount and never
/// mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: String,
    pub host: String,
    pub version: String,
}

impl AppConfig {
    /// Build the bundle for `host`, which is kept verbatim.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT.to_owned(),
            host: host.into(),
            version: VERSION.to_owned(),
        }
    }

    /// Build the bundle from the page's current domain.
    pub fn from_page(page: &impl Page) -> Self {
        Self::for_host(page.domain())
    }

    /// `host:port`, as displayed in the footer.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

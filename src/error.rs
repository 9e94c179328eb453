//! Bootstrap failures.
//!
//! ERROR HANDLING
//! ==============
//! Mount errors are returned to the caller untouched: no retry and no
//! fallback instance. The angle and viewport helpers never fail, so this is
//! the crate's only error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    /// No global `window` object (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,

    /// The page has no element with the reserved mount id.
    #[error("mount target #{id} not found")]
    MissingMountTarget { id: String },

    /// The mount target exists but the UI could not be attached to it.
    #[error("mount failed: {0}")]
    Mount(String),
}

#[cfg(feature = "csr")]
impl From<BootError> for wasm_bindgen::JsValue {
    fn from(err: BootError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

//! Ambient page environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrap and the viewport helper read two values from the hosting
//! page at call time: the document's domain and the viewport width. The
//! `Page` trait isolates those reads so the logic around them can run
//! against a fixed environment on the host.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Source of ambient page values, read fresh on every call.
pub trait Page {
    /// Host name of the current document, without port or scheme.
    fn domain(&self) -> String;

    /// Viewport width in CSS pixels.
    fn inner_width(&self) -> f64;
}

/// The live browser page.
///
/// Outside a `csr` build there is no page to read, so the domain is empty
/// and the width is zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn domain(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .map(|doc| doc.domain())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn inner_width(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
        }
        #[cfg(not(feature = "csr"))]
        {
            0.0
        }
    }
}

/// A fixed page environment.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticPage {
    pub domain: String,
    pub inner_width: f64,
}

impl StaticPage {
    pub fn new(domain: impl Into<String>, inner_width: f64) -> Self {
        Self { domain: domain.into(), inner_width }
    }
}

impl Page for StaticPage {
    fn domain(&self) -> String {
        self.domain.clone()
    }

    fn inner_width(&self) -> f64 {
        self.inner_width
    }
}

impl<P: Page + ?Sized> Page for &P {
    fn domain(&self) -> String {
        (**self).domain()
    }

    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }
}

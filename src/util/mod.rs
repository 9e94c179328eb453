//! Small stateless helpers shared across the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Util` bundles the two helpers the components call: angle conversion and
//! the mobile viewport check. The viewport read goes through a `Page`, so
//! one shared instance serves the browser (`UTIL`) and tests build their
//! own over a `StaticPage`.
//!
//! `astron` and `projection` hold the pure labelling and sky-plot math for
//! the tracked bodies.
//!
//! COERCION
//! ========
//! `rad_to_degree` always renders its input to text and parses it back,
//! even when it is already a number. For finite numbers this is lossless.
//! Non-numeric text becomes NaN and the NaN flows through unreported.


pub mod angle;
pub mod astron;
pub mod projection;
pub mod viewport;

pub use angle::{
    CardinalDirection, Value, deg_to_cardinal, is_runtime_whitespace, parse_float, rad_to_deg,
};
pub use astron::{AstronObject, azimuth_direction, format_elevation};
pub use viewport::{MOBILE_MAX_WIDTH, is_mobile_width};

use crate::page::{BrowserPage, Page};

/// Shared helper instance over the live page.
pub static UTIL: Util<BrowserPage> = Util::new(BrowserPage);

#[derive(Clone, Copy, Debug, Default)]
pub struct Util<P> {
    page: P,
}

impl<P: Page> Util<P> {
    pub const fn new(page: P) -> Self {
        Self { page }
    }

    /// Degrees for an angle in radians, after coercing `val` through its
    /// text form. Returns NaN when the text does not start with a number.
    pub fn rad_to_degree(&self, val: impl Into<Value>) -> f64 {
        let rad = parse_float(&val.into().to_text());
        rad_to_deg(rad)
    }

    /// Whether the viewport is at most [`MOBILE_MAX_WIDTH`] wide right now.
    pub fn is_mobile(&self) -> bool {
        is_mobile_width(self.page.inner_width())
    }
}

//! Viewport size classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widest viewport, in CSS pixels, still treated as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// `true` unless `width` is strictly wider than [`MOBILE_MAX_WIDTH`].
pub fn is_mobile_width(width: f64) -> bool {
    if width > MOBILE_MAX_WIDTH {
        return false;
    }
    true
}

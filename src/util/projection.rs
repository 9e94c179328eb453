//! Sky-plot projection: azimuth/elevation to screen coordinates.
//!
//! The plot is a disc with the zenith at the centre and the horizon on the
//! rim. North is up and azimuth grows clockwise. Radial distance uses a
//! square-root scale so bodies near the horizon are spread out.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::f64::consts::FRAC_PI_2;

/// Narrowest plot width; marker sizes scale relative to it.
pub const MIN_PLOT_WIDTH: f64 = 300.0;

/// Screen-space centre of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

/// Map a relative radius in `[0, 1]` onto the square-root display scale.
pub fn scale_radius(rel: f64) -> f64 {
    rel.sqrt()
}

/// Screen point at azimuth `az` (radians) and relative radius `r_rel` on a
/// plot of screen radius `radius`. `r_rel` is used as-is, so values above 1
/// land outside the rim (used for axis labels).
pub fn project_az_r_rel(az: f64, r_rel: f64, radius: f64, center: Center) -> (f64, f64) {
    let angle = az - FRAC_PI_2;
    (center.x + radius * r_rel * angle.cos(), center.y + radius * r_rel * angle.sin())
}

/// Screen point for a body at azimuth `az` and elevation `el`, both in
/// radians. Bodies below the horizon mirror to their absolute elevation.
pub fn project_az_el(az: f64, el: f64, radius: f64, center: Center) -> (f64, f64) {
    let r_rel = scale_radius(1.0 - el.abs() / FRAC_PI_2);
    project_az_r_rel(az, r_rel, radius, center)
}

/// Screen radius of the elevation ring at `el_deg` degrees.
pub fn elevation_ring_radius(el_deg: f64, radius: f64) -> f64 {
    radius * scale_radius(1.0 - el_deg / 90.0)
}

/// Marker radius for a body of apparent size `size` on a plot `width` wide.
pub fn marker_radius(size: f64, width: f64) -> f64 {
    let scale = 1.5 * width / MIN_PLOT_WIDTH;
    2.0 + scale * (size + 1.0).ln()
}

/// Plot radius for a plot `width` wide: two fifths of the width.
pub fn plot_radius(width: f64) -> f64 {
    2.0 * width / 5.0
}

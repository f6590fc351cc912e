//! Silkscreen outline decomposition for radial two-lead can bodies.
//!
//! The body circle cannot be drawn straight through the leads, so the filled
//! silkscreen is split into four closed polygons that together cover the
//! circle minus a rectangular keep-out carved around each lead. All
//! coordinates are millimeters relative to the electrical center; the right
//! half is generated and the shapes are symmetric about the horizontal axis
//! by construction.

use glam::DVec2;

/// Extra radius added so the silk line clears the body outline.
pub const SILK_CLEARANCE: f64 = 0.12;
/// Stroke width of the rendered polygons.
pub const SILK_LINE_WIDTH: f64 = 0.1;
/// Side length of the square keep-out around each lead.
const KEEPOUT_SIZE: f64 = 1.56;
/// Uniform steps used when sampling the body arc.
const ARC_STEPS: usize = 15;

/// The four closed outlines making up one side of the silkscreen.
#[derive(Debug, Clone)]
pub struct SilkscreenOutline {
    /// Arc across the keep-out's vertical span, closed at the keep-out's
    /// outer edge.
    pub outer: Vec<DVec2>,
    /// Arc from the body's topmost point down to the keep-out's upper edge.
    pub cap_top: Vec<DVec2>,
    /// Mirror of `cap_top` below the axis.
    pub cap_bottom: Vec<DVec2>,
    /// Rectangle from the center line out to the keep-out's inner edge.
    pub inner_rect: Vec<DVec2>,
}

/// Samples the circular outline of radius `r` between two `y` bounds,
/// stepping `y` linearly and solving for `x`. The square root argument is
/// clamped so float overshoot at the interval extremes cannot go negative.
fn arc_points(r: f64, y_start: f64, y_end: f64, steps: usize) -> Vec<DVec2> {
    let step_size = (y_end - y_start) / steps as f64;
    (0..=steps)
        .map(|i| {
            let y = y_start + i as f64 * step_size;
            let x = (r * r - y * y).max(0.0).sqrt();
            DVec2::new(x, y)
        })
        .collect()
}

/// Builds the outline set for a body of the given diameter and lead pitch.
///
/// The keep-out square sits centered on the lead at half the pitch and is
/// widened by half the stroke width on each boundary edge so the drawn line
/// never encroaches on it. Polygons stay well-formed for any radius larger
/// than half the keep-out size.
pub fn generate_outline(diameter: f64, pitch: f64) -> SilkscreenOutline {
    let r = diameter / 2.0 + SILK_CLEARANCE;
    let h = SILK_LINE_WIDTH / 2.0;

    let ko_center_x = pitch / 2.0;
    let ko_x_min = ko_center_x - KEEPOUT_SIZE / 2.0 - h;
    let ko_x_max = ko_center_x + KEEPOUT_SIZE / 2.0 + h;
    let ko_y_limit = KEEPOUT_SIZE / 2.0 + h;

    let mut outer = arc_points(r, -ko_y_limit, ko_y_limit, ARC_STEPS);
    outer.push(DVec2::new(ko_x_max, ko_y_limit));
    outer.push(DVec2::new(ko_x_max, -ko_y_limit));

    let mut cap_top = arc_points(r, -r, -ko_y_limit, ARC_STEPS);
    cap_top.push(DVec2::new(0.0, -ko_y_limit));
    cap_top.push(DVec2::new(0.0, -r));

    let mut cap_bottom = arc_points(r, ko_y_limit, r, ARC_STEPS);
    cap_bottom.push(DVec2::new(0.0, r));
    cap_bottom.push(DVec2::new(0.0, ko_y_limit));

    let inner_rect = vec![
        DVec2::new(0.0, -ko_y_limit),
        DVec2::new(ko_x_min, -ko_y_limit),
        DVec2::new(ko_x_min, ko_y_limit),
        DVec2::new(0.0, ko_y_limit),
    ];

    SilkscreenOutline {
        outer,
        cap_top,
        cap_bottom,
        inner_rect,
    }
}

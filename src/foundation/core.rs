pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Center of the fixed synthesis canvas.
pub const CANVAS_CENTER: Point = Point::new(100.0, 100.0);

/// Base radius every grammar scales its marks from.
pub const BASE_RADIUS: f64 = 60.0;

/// Side length of the square view box the canvas lives in (`0 0 200 200`).
pub const VIEW_BOX_SIZE: f64 = 200.0;

/// Point at `radius` from `center` along `angle` (radians, y pointing down).
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Map a non-negative weight onto `[0, 1)`.
///
/// Harmonic weights are unbounded above (a rare letter repeated many times scores high),
/// so grammars size marks through this instead of clamping.
pub fn squash(w: f64) -> f64 {
    let w = w.max(0.0);
    w / (1.0 + w)
}

/// Round a coordinate to the two-decimal grid used by serialized path data.
pub fn quantize(v: f64) -> f64 {
    let q = (v * 100.0).round() / 100.0;
    // Avoid emitting "-0".
    if q == 0.0 { 0.0 } else { q }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{builder::PathBuilder, is_degenerate, rotation, weight};
use crate::features::extract::FeatureSet;
use crate::foundation::core::{BASE_RADIUS, CANVAS_CENTER, Point, polar};

const OUTER_SCALE: f64 = 0.8;
const INNER_RHYTHM_GATE: f64 = 0.3;

/// Inscribed triangle anchor, optional inverted inner triangle, vertex rays, center cross.
pub(super) fn draw(f: &FeatureSet, b: &mut PathBuilder) {
    let rot = rotation(f);
    let outer_r = BASE_RADIUS * OUTER_SCALE;
    let outer = triangle(outer_r, rot);
    if !b.polyline(&closed(outer)) || is_degenerate(f) {
        return;
    }

    if f.rhythm > INNER_RHYTHM_GATE && b.remaining() >= 3 {
        let inner = triangle(outer_r * (0.25 + 0.5 * f.rhythm), rot + PI);
        if !b.polyline(&closed(inner)) {
            return;
        }
    }

    for (k, vertex) in outer.iter().enumerate() {
        let reach = outer_r + BASE_RADIUS * 0.25 * (0.5 + weight(f, k));
        let tip = polar(CANVAS_CENTER, reach, vertex_angle(rot, k));
        if !b.segment(*vertex, tip) {
            return;
        }
    }

    b.cross(CANVAS_CENTER, BASE_RADIUS * 0.1);
}

fn vertex_angle(rot: f64, k: usize) -> f64 {
    rot - FRAC_PI_2 + k as f64 * TAU / 3.0
}

fn triangle(radius: f64, rot: f64) -> [Point; 3] {
    [0, 1, 2].map(|k| polar(CANVAS_CENTER, radius, vertex_angle(rot, k)))
}

fn closed(tri: [Point; 3]) -> [Point; 4] {
    [tri[0], tri[1], tri[2], tri[0]]
}

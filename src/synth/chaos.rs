use std::f64::consts::{FRAC_PI_4, PI};

use super::{builder::PathBuilder, weight};
use crate::features::extract::FeatureSet;
use crate::foundation::core::{BASE_RADIUS, CANVAS_CENTER, polar};

/// Cross anchor, then one mark per phase angle cycling radial stroke / angled cut / connector.
pub(super) fn draw(f: &FeatureSet, b: &mut PathBuilder) {
    let size = BASE_RADIUS * (0.5 + f.rhythm * 0.5);
    if !b.cross(CANVAS_CENTER, size) {
        return;
    }

    let marks = f.line_count.saturating_sub(2).min(f.phase_angles.len());
    for i in 0..marks {
        let angle = f.phase_angles[i];
        let w = weight(f, i);
        let drawn = match i % 3 {
            0 => radial_stroke(b, angle, w),
            1 => angled_cut(b, angle, w),
            _ => connector(b, f.phase_angles[i - 1], angle, w),
        };
        if !drawn {
            break;
        }
    }
}

fn radial_stroke(b: &mut PathBuilder, angle: f64, w: f64) -> bool {
    b.segment(
        polar(CANVAS_CENTER, BASE_RADIUS * 0.2, angle),
        polar(CANVAS_CENTER, BASE_RADIUS * (0.4 + 0.6 * w), angle),
    )
}

fn angled_cut(b: &mut PathBuilder, angle: f64, w: f64) -> bool {
    let mid = polar(CANVAS_CENTER, BASE_RADIUS * (0.5 + 0.4 * w), angle);
    let dir = angle + FRAC_PI_4;
    let half = BASE_RADIUS * 0.15 * (0.5 + w);
    b.segment(polar(mid, half, dir + PI), polar(mid, half, dir))
}

fn connector(b: &mut PathBuilder, prev_angle: f64, angle: f64, w: f64) -> bool {
    let r = BASE_RADIUS * (0.6 + 0.4 * w);
    b.segment(
        polar(CANVAS_CENTER, r, prev_angle),
        polar(CANVAS_CENTER, r, angle),
    )
}

use std::f64::consts::TAU;

use super::{builder::PathBuilder, rotation};
use crate::features::extract::FeatureSet;
use crate::foundation::core::{BASE_RADIUS, CANVAS_CENTER, Point, polar, squash};

/// Hard cap on sampled spiral points.
const SPIRAL_POINTS: usize = 20;
/// Chords drawn between consecutive power marks.
const CHORDS_PER_MARK: usize = 2;

/// Archimedean spiral drawn as chords (each chord spans two spiral steps), with a cross-shaped
/// power mark placed on the spiral after every couple of chords while harmonics last.
pub(super) fn draw(f: &FeatureSet, b: &mut PathBuilder) {
    let spiral = spiral_points(f);
    let mut marks = f.harmonics.iter();
    let mut head = 0;
    let mut chords = 0;

    while head + 2 < SPIRAL_POINTS {
        if !b.segment(spiral[head], spiral[head + 2]) {
            return;
        }
        head += 2;
        chords += 1;

        if chords % CHORDS_PER_MARK == 0
            && let Some(&h) = marks.next()
        {
            let w = squash(h);
            let at = (w * (SPIRAL_POINTS - 1) as f64).round() as usize;
            if !b.cross(spiral[at], BASE_RADIUS * 0.06 * (1.0 + w)) {
                return;
            }
        }
    }
}

fn spiral_points(f: &FeatureSet) -> [Point; SPIRAL_POINTS] {
    let turns = 1.5 + f.vowel_ratio * 2.0;
    let start = rotation(f);
    let last = (SPIRAL_POINTS - 1) as f64;
    std::array::from_fn(|j| {
        let t = j as f64 / last;
        polar(
            CANVAS_CENTER,
            BASE_RADIUS * (0.08 + 0.92 * t),
            start + t * turns * TAU,
        )
    })
}

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{builder::PathBuilder, is_degenerate};
use crate::features::extract::FeatureSet;
use crate::foundation::core::{BASE_RADIUS, CANVAS_CENTER, Point, polar, squash};
use crate::foundation::math::Rng64;

const MIN_NODES: usize = 3;
const MAX_NODES: usize = 6;
const LINK_THRESHOLD: f64 = 0.3;
/// Angular jitter as a fraction of the node spacing.
const JITTER: f64 = 0.15;

/// Node ring offset by harmonics; first/last link, harmonic links, then X-marks on nodes.
///
/// Nodes sit at even angular steps, each nudged by up to 15% of a step from a SplitMix64
/// stream seeded with `FeatureSet::seed`, so equal feature sets always place nodes identically.
pub(super) fn draw(f: &FeatureSet, b: &mut PathBuilder) {
    let nodes = place_nodes(f);
    let n = nodes.len();

    if !b.segment(nodes[0], nodes[n - 1]) || is_degenerate(f) {
        return;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let avg = (harmonic_at(f, i) + harmonic_at(f, j)) * 0.5;
            if avg > LINK_THRESHOLD && !b.segment(nodes[i], nodes[j]) {
                return;
            }
        }
    }

    for (k, node) in nodes.iter().enumerate() {
        if !b.x_mark(*node, BASE_RADIUS * 0.05 * (1.0 + squash(harmonic_at(f, k)))) {
            return;
        }
    }
}

pub(super) fn place_nodes(f: &FeatureSet) -> Vec<Point> {
    let n = f.harmonics.len().clamp(MIN_NODES, MAX_NODES);
    let step = TAU / n as f64;
    let mut rng = Rng64::new(f.seed);
    (0..n)
        .map(|k| {
            let angle = -FRAC_PI_2 + k as f64 * step + rng.next_signed() * step * JITTER;
            let radius = BASE_RADIUS * 0.6 + BASE_RADIUS * 0.3 * squash(harmonic_at(f, k));
            polar(CANVAS_CENTER, radius, angle)
        })
        .collect()
}

/// Raw harmonic for node `k`; nodes beyond the harmonic table count as silent.
fn harmonic_at(f: &FeatureSet, k: usize) -> f64 {
    f.harmonics.get(k).copied().unwrap_or(0.0)
}

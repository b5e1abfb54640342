use crate::foundation::core::Point;
use crate::synth::primitive::{Primitive, SigilPath};

/// Append-only primitive sink with a hard budget.
///
/// Every emit call reports whether it was accepted; once the budget is spent all further
/// calls are no-ops, so grammars can stop mid-construction without extra bookkeeping.
#[derive(Debug)]
pub(crate) struct PathBuilder {
    budget: usize,
    primitives: Vec<Primitive>,
    cursor: Option<Point>,
}

impl PathBuilder {
    pub(crate) fn new(budget: usize) -> Self {
        Self {
            budget,
            primitives: Vec::with_capacity(budget),
            cursor: None,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.budget.saturating_sub(self.primitives.len())
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Emit one segment. Continues the current run when `from` is the previous end point.
    pub(crate) fn segment(&mut self, from: Point, to: Point) -> bool {
        if self.is_exhausted() {
            return false;
        }
        let prim = if self.cursor == Some(from) {
            Primitive::LineTo { to }
        } else {
            Primitive::MoveLine { from, to }
        };
        self.primitives.push(prim);
        self.cursor = Some(to);
        true
    }

    /// Emit consecutive segments through `points`. Returns `false` if the budget cut it short.
    pub(crate) fn polyline(&mut self, points: &[Point]) -> bool {
        points.windows(2).all(|w| self.segment(w[0], w[1]))
    }

    /// Upright cross: vertical stroke, then horizontal stroke.
    pub(crate) fn cross(&mut self, center: Point, half: f64) -> bool {
        self.segment(
            Point::new(center.x, center.y - half),
            Point::new(center.x, center.y + half),
        ) && self.segment(
            Point::new(center.x - half, center.y),
            Point::new(center.x + half, center.y),
        )
    }

    /// Diagonal cross.
    pub(crate) fn x_mark(&mut self, center: Point, half: f64) -> bool {
        self.segment(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
        ) && self.segment(
            Point::new(center.x + half, center.y - half),
            Point::new(center.x - half, center.y + half),
        )
    }

    pub(crate) fn finish(self) -> SigilPath {
        SigilPath::from_primitives(self.primitives)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/builder.rs"]
mod tests;

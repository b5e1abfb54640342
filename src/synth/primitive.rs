use std::fmt::{self, Write as _};

use crate::foundation::core::{BezPath, Point, Rect, quantize};
use crate::foundation::math::Fnv1a64;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One straight segment of a sigil path.
pub enum Primitive {
    /// Segment that starts a new run: `M from L to`.
    MoveLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Segment continuing the current run from the previous end point: `L to`.
    LineTo {
        /// End point.
        to: Point,
    },
}

impl Primitive {
    /// End point of this segment.
    pub fn end(&self) -> Point {
        match *self {
            Primitive::MoveLine { to, .. } | Primitive::LineTo { to } => to,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered, append-only sequence of primitives produced by [`crate::synthesize`].
///
/// The first primitive of a non-empty path is always a [`Primitive::MoveLine`].
pub struct SigilPath {
    primitives: Vec<Primitive>,
}

impl SigilPath {
    pub(crate) fn from_primitives(primitives: Vec<Primitive>) -> Self {
        debug_assert!(
            !matches!(primitives.first(), Some(Primitive::LineTo { .. })),
            "path must open with a move"
        );
        Self { primitives }
    }

    /// Emitted primitives, in order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives (segments).
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether no primitive was emitted.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Serialize to move/line path data: `M x y L x y ...`, space separated,
    /// coordinates rounded to two decimals.
    pub fn to_path_data(&self) -> String {
        let mut out = String::with_capacity(self.primitives.len() * 24);
        for prim in &self.primitives {
            if !out.is_empty() {
                out.push(' ');
            }
            match *prim {
                Primitive::MoveLine { from, to } => {
                    push_cmd(&mut out, 'M', from);
                    out.push(' ');
                    push_cmd(&mut out, 'L', to);
                }
                Primitive::LineTo { to } => push_cmd(&mut out, 'L', to),
            }
        }
        out
    }

    /// Convert to a kurbo path using the same quantized coordinates as [`Self::to_path_data`].
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        for prim in &self.primitives {
            match *prim {
                Primitive::MoveLine { from, to } => {
                    bez.move_to(quantize_point(from));
                    bez.line_to(quantize_point(to));
                }
                Primitive::LineTo { to } => bez.line_to(quantize_point(to)),
            }
        }
        bez
    }

    /// Axis-aligned bounds of the path, or `None` when empty.
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        use kurbo::Shape as _;
        Some(self.to_bez_path().bounding_box())
    }

    /// Stable 64-bit fingerprint of the serialized path data.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write_bytes(self.to_path_data().as_bytes());
        h.finish()
    }
}

impl fmt::Display for SigilPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}

fn quantize_point(p: Point) -> Point {
    Point::new(quantize(p.x), quantize(p.y))
}

fn push_cmd(out: &mut String, cmd: char, p: Point) {
    let p = quantize_point(p);
    // Writing into a String cannot fail.
    let _ = write!(out, "{cmd} {} {}", p.x, p.y);
}

#[cfg(test)]
#[path = "../../tests/unit/synth/primitive.rs"]
mod tests;

//! Sigil turns a short statement of intent into a reproducible abstract vector glyph.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: `statement -> FeatureSet` (cleaned text, seed, harmonics, phase angles,
//!    rhythm, complexity, primitive budget)
//! 2. **Synthesize**: `FeatureSet + Paradigm -> SigilPath` (bounded move/line primitives)
//! 3. **Serialize**: `SigilPath -> "M x y L x y ..."`
//!
//! [`forge`] runs all three behind statement validation. The collaborators around the core
//! ([`SigilStore`] for records, charges and resonance; [`svg_document`] / [`rasterize`] for
//! previews) never feed back into geometry.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: extraction and synthesis are pure; the only pseudo-randomness is a
//!   SplitMix64 stream seeded from the statement.
//! - **Bounded**: a path never holds more primitives than its feature set's `line_count`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod features;
mod forge;
mod foundation;
mod preview;
mod store;
mod synth;

pub use features::extract::{
    FeatureSet, MAX_HARMONICS, MAX_LINE_COUNT, MAX_PHASE_ANGLES, MIN_LINE_COUNT, extract,
    line_count_for,
};
pub use features::reduction::{Reduction, reduce};
pub use forge::{BatchOpts, GeneratedSigil, forge, forge_batch, validate_statement};
pub use foundation::core::{
    Affine, BASE_RADIUS, BezPath, CANVAS_CENTER, Point, Rect, VIEW_BOX_SIZE, Vec2,
};
pub use foundation::error::{SigilError, SigilResult};
pub use preview::{PreviewOpts, RasterFrame, rasterize, svg_document};
pub use store::collection::SigilStore;
pub use store::practice::{
    GnosisSession, SERVITOR_FEED_BOOST, Servitor, ServitorResult, SynchronicityCategory,
    SynchronicityEvent,
};
pub use store::record::{GnosisMethod, Manifestation, SigilId, SigilPatch, SigilRecord};
pub use store::resonance::{ResonanceConfig, resonance_at};
pub use synth::paradigm::Paradigm;
pub use synth::primitive::{Primitive, SigilPath};
pub use synth::synthesize;

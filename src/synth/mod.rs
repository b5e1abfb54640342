//! Path synthesis: feature set + paradigm -> bounded primitive sequence.
//!
//! Every grammar draws on a fixed canvas (center `(100, 100)`, base radius `60`), reserves its
//! anchor first, then spends the remaining [`FeatureSet::line_count`] budget on
//! feature-driven marks. Nothing here touches an unseeded random source.

pub(crate) mod builder;
mod chaos;
mod cybernetic;
mod hermetic;
/// Closed set of stylistic grammars.
pub mod paradigm;
/// Path primitives and their serialized form.
pub mod primitive;
mod shamanic;

use crate::features::extract::FeatureSet;
use crate::foundation::core::squash;
use builder::PathBuilder;
use paradigm::Paradigm;
use primitive::SigilPath;

/// Render a feature set under `paradigm`.
///
/// Pure and total: identical inputs give byte-identical output, and the result never holds
/// more than `features.line_count` primitives. A feature set with no letters yields the
/// paradigm's anchor alone.
pub fn synthesize(features: &FeatureSet, paradigm: Paradigm) -> SigilPath {
    let mut builder = PathBuilder::new(features.line_count);
    match paradigm {
        Paradigm::Chaos => chaos::draw(features, &mut builder),
        Paradigm::Hermetic => hermetic::draw(features, &mut builder),
        Paradigm::Shamanic => shamanic::draw(features, &mut builder),
        Paradigm::Cybernetic => cybernetic::draw(features, &mut builder),
    }
    builder.finish()
}

/// Harmonic for slot `i`, cycling when there are fewer harmonics than slots.
fn harmonic_cyclic(f: &FeatureSet, i: usize) -> f64 {
    if f.harmonics.is_empty() {
        0.0
    } else {
        f.harmonics[i % f.harmonics.len()]
    }
}

/// Mark weight in `[0, 1)` for slot `i`.
fn weight(f: &FeatureSet, i: usize) -> f64 {
    squash(harmonic_cyclic(f, i))
}

fn is_degenerate(f: &FeatureSet) -> bool {
    f.unique_letters.is_empty()
}

fn rotation(f: &FeatureSet) -> f64 {
    f.phase_angles.first().copied().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/grammars.rs"]
mod tests;

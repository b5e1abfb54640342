//! Sigil collection: records, charge events, resonance, JSON persistence.
//!
//! Nothing in here feeds back into path geometry.

/// Insertion-ordered keyed collection.
pub mod collection;
/// Servitors, gnosis sessions and synchronicity logs.
pub mod practice;
/// Stored entities and patches.
pub mod record;
/// Resonance growth and decay.
pub mod resonance;

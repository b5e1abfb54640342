/// Geometry re-exports, canvas constants and numeric helpers.
pub(crate) mod core;
/// Error taxonomy.
pub(crate) mod error;
/// Hashing and seeded pseudo-randomness.
pub(crate) mod math;

//! Statement analysis.

/// Numeric feature extraction driving path synthesis.
pub mod extract;
/// Textual reduction stages for display.
pub mod reduction;

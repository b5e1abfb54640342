use std::{fmt, str::FromStr};

use crate::foundation::error::{SigilError, SigilResult};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Stylistic grammar selector. Each variant maps to exactly one grammar.
pub enum Paradigm {
    /// Cross anchor with alternating radial strokes, cuts, and connectors.
    #[default]
    Chaos,
    /// Inscribed triangles, vertex rays, and a center cross.
    Hermetic,
    /// Spiral chords interleaved with power marks.
    Shamanic,
    /// Node ring with harmonic links and node marks.
    Cybernetic,
}

impl Paradigm {
    /// Every paradigm, in declaration order.
    pub const ALL: [Paradigm; 4] = [
        Paradigm::Chaos,
        Paradigm::Hermetic,
        Paradigm::Shamanic,
        Paradigm::Cybernetic,
    ];

    /// Lowercase name used on the wire and in the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Paradigm::Chaos => "chaos",
            Paradigm::Hermetic => "hermetic",
            Paradigm::Shamanic => "shamanic",
            Paradigm::Cybernetic => "cybernetic",
        }
    }

    /// Parse a paradigm name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names are rejected rather than mapped to a fallback grammar.
    pub fn parse(name: &str) -> SigilResult<Self> {
        let needle = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                SigilError::validation(format!(
                    "unknown paradigm '{needle}' (expected one of: chaos, hermetic, shamanic, cybernetic)"
                ))
            })
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Paradigm {
    type Err = SigilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/paradigm.rs"]
mod tests;

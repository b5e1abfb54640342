use std::f64::consts::PI;

/// Harmonic weights are only produced for this many leading unique letters.
pub const MAX_HARMONICS: usize = 8;
/// Phase angles are only produced for this many leading characters.
pub const MAX_PHASE_ANGLES: usize = 13;
/// Lower bound of [`FeatureSet::line_count`].
pub const MIN_LINE_COUNT: usize = 7;
/// Upper bound of [`FeatureSet::line_count`].
pub const MAX_LINE_COUNT: usize = 13;

const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Deterministic numeric summary of a statement.
///
/// Produced by [`extract`]; consumed by [`crate::synthesize`]. Two statements that normalize
/// to the same `cleaned_text` yield bit-identical feature sets.
pub struct FeatureSet {
    /// Lower-cased statement with everything outside `a-z` removed.
    pub cleaned_text: String,
    /// Positional character-code accumulator over `cleaned_text`.
    pub seed: u64,
    /// Distinct letters in first-occurrence order.
    pub unique_letters: Vec<char>,
    /// One weight per leading unique letter (at most [`MAX_HARMONICS`]).
    pub harmonics: Vec<f64>,
    /// One angle in radians per leading character (at most [`MAX_PHASE_ANGLES`]).
    pub phase_angles: Vec<f64>,
    /// Identity of the first three unique letters, in `[0, 1]`.
    pub rhythm: f64,
    /// Share of vowels in `cleaned_text`.
    pub vowel_ratio: f64,
    /// Share of consonants in `cleaned_text`.
    pub consonant_ratio: f64,
    /// Product of coverage, vowel ratio, consonant ratio, and rhythm.
    pub complexity: f64,
    /// Primitive budget for synthesis, in `[MIN_LINE_COUNT, MAX_LINE_COUNT]`.
    pub line_count: usize,
}

/// Derive a [`FeatureSet`] from free text.
///
/// Total: empty or non-alphabetic input yields empty letter tables, a zero seed, zero
/// rhythm, and the minimum line count.
pub fn extract(statement: &str) -> FeatureSet {
    let cleaned_text = clean(statement);
    let bytes = cleaned_text.as_bytes();
    let len = bytes.len();

    let seed = bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &c)| {
            acc.wrapping_add(u64::from(c).wrapping_mul(i as u64 + 1))
        });

    let mut freq = [0usize; 26];
    let mut unique = Vec::<u8>::with_capacity(26);
    for &c in bytes {
        let slot = usize::from(c - b'a');
        if freq[slot] == 0 {
            unique.push(c);
        }
        freq[slot] += 1;
    }

    let harmonics = unique
        .iter()
        .take(MAX_HARMONICS)
        .map(|&c| {
            let idx = c - b'a';
            f64::from(idx) * freq[usize::from(idx)] as f64 / len as f64
        })
        .collect::<Vec<_>>();

    let phase_angles = bytes
        .iter()
        .take(MAX_PHASE_ANGLES)
        .enumerate()
        .map(|(i, &c)| {
            let deg = (u64::from(c) * (i as u64 + 1)) % 360;
            deg as f64 * (PI / 180.0)
        })
        .collect::<Vec<_>>();

    let rhythm = if unique.is_empty() {
        0.0
    } else {
        let lead = &unique[..unique.len().min(3)];
        let sum: f64 = lead.iter().map(|&c| f64::from(c - b'a') / 25.0).sum();
        sum / lead.len() as f64
    };

    let vowels = bytes.iter().filter(|c| VOWELS.contains(*c)).count();
    let denom = len.max(1) as f64;
    let vowel_ratio = vowels as f64 / denom;
    let consonant_ratio = (len - vowels) as f64 / denom;

    let coverage = unique.len() as f64 / 26.0;
    let complexity = coverage * vowel_ratio * consonant_ratio * rhythm;
    let line_count = line_count_for(complexity);

    let features = FeatureSet {
        cleaned_text,
        seed,
        unique_letters: unique.iter().map(|&c| char::from(c)).collect(),
        harmonics,
        phase_angles,
        rhythm,
        vowel_ratio,
        consonant_ratio,
        complexity,
        line_count,
    };
    tracing::trace!(
        seed = features.seed,
        unique = features.unique_letters.len(),
        complexity = features.complexity,
        line_count = features.line_count,
        "extracted features"
    );
    features
}

/// Primitive budget for a complexity score: `clamp(floor(7 + complexity * 6), 7, 13)`.
///
/// Non-decreasing in `complexity`; NaN maps to the minimum. Extracted complexity never
/// exceeds `0.25`, so statements land on 7 or 8 in practice.
pub fn line_count_for(complexity: f64) -> usize {
    if complexity.is_nan() {
        return MIN_LINE_COUNT;
    }
    let raw = (MIN_LINE_COUNT as f64 + complexity * 6.0).floor();
    raw.clamp(MIN_LINE_COUNT as f64, MAX_LINE_COUNT as f64) as usize
}

fn clean(statement: &str) -> String {
    statement
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/features/extract.rs"]
mod tests;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The classic textual reduction of a statement of intent.
///
/// Each stage is derived from the previous one. This is presentation material; path
/// geometry is driven by [`crate::FeatureSet`] only.
pub struct Reduction {
    /// Upper-cased statement with all whitespace removed.
    pub condensed: String,
    /// `condensed` without the vowels `A E I O U`.
    pub devoweled: String,
    /// `devoweled` with repeated characters dropped, first occurrence kept.
    pub essence: String,
}

/// Reduce a statement: condense, strip vowels, then keep each remaining character once.
pub fn reduce(statement: &str) -> Reduction {
    let condensed: String = statement
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let devoweled: String = condensed
        .chars()
        .filter(|c| !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U'))
        .collect();

    let mut essence = String::with_capacity(devoweled.len());
    for c in devoweled.chars() {
        if !essence.contains(c) {
            essence.push(c);
        }
    }

    Reduction {
        condensed,
        devoweled,
        essence,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/features/reduction.rs"]
mod tests;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{forge::GeneratedSigil, store::resonance::ResonanceConfig, synth::paradigm::Paradigm};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Caller-supplied record identifier.
pub struct SigilId(pub String);

impl SigilId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SigilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SigilId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a sigil was (or will be) charged.
pub enum GnosisMethod {
    /// Quiet focus.
    #[default]
    Meditation,
    /// Dance or rhythmic movement.
    Dance,
    /// Physical exhaustion.
    Exhaustion,
    /// Sexual gnosis.
    Sex,
    /// Pain.
    Pain,
    /// Intoxication.
    Intoxication,
    /// Anything else.
    Other,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An observed outcome attributed to a sigil.
pub struct Manifestation {
    /// Caller-supplied identifier.
    pub id: String,
    /// When it was observed.
    pub date: DateTime<Utc>,
    /// Free-form description.
    pub description: String,
    /// Related coincidences.
    #[serde(default)]
    pub synchronicities: Vec<String>,
    /// How sure the observer is that this relates to the sigil, in `[0, 1]`.
    pub confidence: f64,
    /// Emotional tone, in `[-1, 1]`.
    pub emotional_resonance: f64,
}

impl Manifestation {
    /// Build a manifestation, clamping `confidence` and `emotional_resonance` into range.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
        confidence: f64,
        emotional_resonance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            description: description.into(),
            synchronicities: Vec::new(),
            confidence: clamp_finite(confidence, 0.0, 1.0),
            emotional_resonance: clamp_finite(emotional_resonance, -1.0, 1.0),
        }
    }

    /// Attach a related coincidence.
    pub fn with_synchronicity(mut self, s: impl Into<String>) -> Self {
        self.synchronicities.push(s.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A stored sigil plus the metadata the store maintains for it.
pub struct SigilRecord {
    /// Unique key within a store.
    pub id: SigilId,
    /// Statement of intent.
    pub statement: String,
    /// Grammar used to draw `path_data`.
    pub paradigm: Paradigm,
    /// Serialized move/line path data.
    pub path_data: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Charge timestamps, append-only, in call order.
    #[serde(default)]
    pub charge_events: Vec<DateTime<Utc>>,
    /// Stored resonance as of the last charge (or creation), in `[0, 1]`.
    pub resonance_strength: f64,
    /// Charging method.
    #[serde(default)]
    pub gnosis_method: GnosisMethod,
    /// Observed outcomes.
    #[serde(default)]
    pub manifestations: Vec<Manifestation>,
}

impl SigilRecord {
    /// Take ownership of a freshly generated sigil.
    pub fn from_generated(id: SigilId, sigil: GeneratedSigil, cfg: &ResonanceConfig) -> Self {
        Self {
            id,
            statement: sigil.statement,
            paradigm: sigil.paradigm,
            path_data: sigil.path_data,
            created_at: sigil.created_at,
            charge_events: Vec::new(),
            resonance_strength: clamp_finite(cfg.initial, 0.0, 1.0),
            gnosis_method: GnosisMethod::default(),
            manifestations: Vec::new(),
        }
    }

    /// Set the charging method.
    pub fn with_gnosis_method(mut self, method: GnosisMethod) -> Self {
        self.gnosis_method = method;
        self
    }

    /// Most recent charge, if any.
    pub fn last_charged(&self) -> Option<DateTime<Utc>> {
        self.charge_events.iter().max().copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Partial update for [`crate::SigilStore::update`]. `None` fields are left unchanged.
pub struct SigilPatch {
    /// New statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    /// New paradigm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paradigm: Option<Paradigm>,
    /// New path data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    /// New stored resonance; clamped to `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resonance_strength: Option<f64>,
    /// New charging method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnosis_method: Option<GnosisMethod>,
}

impl SigilPatch {
    pub(crate) fn apply(self, record: &mut SigilRecord) {
        if let Some(v) = self.statement {
            record.statement = v;
        }
        if let Some(v) = self.paradigm {
            record.paradigm = v;
        }
        if let Some(v) = self.path_data {
            record.path_data = v;
        }
        if let Some(v) = self.resonance_strength {
            record.resonance_strength = clamp_finite(v, 0.0, 1.0);
        }
        if let Some(v) = self.gnosis_method {
            record.gnosis_method = v;
        }
    }
}

/// Clamp into `[lo, hi]`; NaN maps to `lo`.
pub(crate) fn clamp_finite(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

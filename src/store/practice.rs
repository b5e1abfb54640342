use chrono::{DateTime, Utc};

use crate::store::record::{GnosisMethod, SigilId, clamp_finite};

/// Energy added each time a servitor is fed.
pub const SERVITOR_FEED_BOOST: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A long-lived working glyph with an energy level that is topped up by feeding.
pub struct Servitor {
    /// Unique key among the store's servitors.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the servitor is for.
    pub purpose: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Serialized move/line path data of its glyph.
    pub path_data: String,
    /// Current energy in `[0, 1]`.
    pub energy: f64,
    /// Most recent feeding (creation time until first fed).
    pub last_fed: DateTime<Utc>,
    /// Reported outcomes, in call order.
    #[serde(default)]
    pub results: Vec<ServitorResult>,
}

impl Servitor {
    /// New servitor with `energy` clamped into `[0, 1]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        purpose: impl Into<String>,
        path_data: impl Into<String>,
        energy: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            purpose: purpose.into(),
            created_at,
            path_data: path_data.into(),
            energy: clamp_finite(energy, 0.0, 1.0),
            last_fed: created_at,
            results: Vec::new(),
        }
    }

    pub(crate) fn feed(&mut self, at: DateTime<Utc>) {
        self.energy = clamp_finite(self.energy + SERVITOR_FEED_BOOST, 0.0, 1.0);
        self.last_fed = at;
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One reported outcome of a servitor's work.
pub struct ServitorResult {
    /// When it was reported.
    pub date: DateTime<Utc>,
    /// Free-form description.
    pub description: String,
    /// Whether the outcome counted as a success.
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A charging session covering one or more stored sigils.
pub struct GnosisSession {
    /// Unique key among the store's sessions.
    pub id: String,
    /// When the session took place.
    pub date: DateTime<Utc>,
    /// Method used.
    pub method: GnosisMethod,
    /// Length in minutes, never negative.
    pub duration_minutes: f64,
    /// Intensity in `[0, 1]`.
    pub intensity: f64,
    /// Sigils charged during the session; each must exist in the store.
    #[serde(default)]
    pub sigils_charged: Vec<SigilId>,
    /// Optional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GnosisSession {
    /// New session with no sigils; `duration_minutes` and `intensity` are clamped.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        method: GnosisMethod,
        duration_minutes: f64,
        intensity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            method,
            duration_minutes: clamp_finite(duration_minutes, 0.0, f64::MAX),
            intensity: clamp_finite(intensity, 0.0, 1.0),
            sigils_charged: Vec::new(),
            notes: None,
        }
    }

    /// Add a charged sigil.
    pub fn with_sigil(mut self, id: SigilId) -> Self {
        self.sigils_charged.push(id);
        self
    }

    /// Attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of meaningful coincidence.
pub enum SynchronicityCategory {
    /// Recurring numbers.
    Number,
    /// A symbol turning up.
    Symbol,
    /// A chance meeting.
    Encounter,
    /// A dream.
    Dream,
    /// Books, songs, screens.
    Media,
    /// Anything else.
    #[default]
    Other,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A coincidence logged against zero or more stored sigils.
pub struct SynchronicityEvent {
    /// Unique key among the store's events.
    pub id: String,
    /// When it happened.
    pub date: DateTime<Utc>,
    /// Free-form description.
    pub description: String,
    /// Related sigils; each must exist in the store.
    #[serde(default)]
    pub related_sigils: Vec<SigilId>,
    /// Significance in `[0, 1]`.
    pub significance: f64,
    /// Kind of coincidence.
    #[serde(default)]
    pub category: SynchronicityCategory,
}

impl SynchronicityEvent {
    /// New event with no related sigils; `significance` is clamped into `[0, 1]`.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
        significance: f64,
        category: SynchronicityCategory,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            description: description.into(),
            related_sigils: Vec::new(),
            significance: clamp_finite(significance, 0.0, 1.0),
            category,
        }
    }

    /// Relate a stored sigil.
    pub fn with_sigil(mut self, id: SigilId) -> Self {
        self.related_sigils.push(id);
        self
    }
}

use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::{
    foundation::error::{SigilError, SigilResult},
    store::practice::{GnosisSession, Servitor, ServitorResult, SynchronicityEvent},
    store::record::{Manifestation, SigilId, SigilPatch, SigilRecord},
    store::resonance::{ResonanceConfig, charged},
};

const STORE_VERSION: u32 = 1;

#[derive(serde::Serialize, serde::Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    sigils: Vec<SigilRecord>,
    #[serde(default)]
    servitors: Vec<Servitor>,
    #[serde(default)]
    gnosis_sessions: Vec<GnosisSession>,
    #[serde(default)]
    synchronicities: Vec<SynchronicityEvent>,
}

#[derive(Clone, Debug, Default)]
/// Keyed collection of sigil records, iterated in insertion order, plus the servitors,
/// gnosis sessions and synchronicities logged alongside them.
///
/// Owned by the application shell and passed to whatever needs it; there is no global
/// instance.
pub struct SigilStore {
    records: Vec<SigilRecord>,
    servitors: Vec<Servitor>,
    sessions: Vec<GnosisSession>,
    synchronicities: Vec<SynchronicityEvent>,
    cfg: ResonanceConfig,
}

impl SigilStore {
    /// Empty store with default resonance settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with explicit resonance settings.
    pub fn with_config(cfg: ResonanceConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Resonance settings in effect.
    pub fn config(&self) -> &ResonanceConfig {
        &self.cfg
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SigilRecord> {
        self.records.iter()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &SigilId> {
        self.records.iter().map(|r| &r.id)
    }

    /// Look up a record.
    pub fn get(&self, id: &SigilId) -> Option<&SigilRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Append a record. Identifiers must be unique within the store.
    pub fn create(&mut self, record: SigilRecord) -> SigilResult<&SigilRecord> {
        if self.get(&record.id).is_some() {
            return Err(SigilError::validation(format!(
                "duplicate sigil id '{}'",
                record.id
            )));
        }
        tracing::debug!(id = %record.id, paradigm = %record.paradigm, "store create");
        self.records.push(record);
        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    /// Apply a partial update.
    pub fn update(&mut self, id: &SigilId, patch: SigilPatch) -> SigilResult<&SigilRecord> {
        let record = self.get_mut(id)?;
        patch.apply(record);
        tracing::debug!(id = %id, "store update");
        Ok(record)
    }

    /// Record a charge at `at` and raise the stored resonance.
    pub fn append_charge(&mut self, id: &SigilId, at: DateTime<Utc>) -> SigilResult<&SigilRecord> {
        let cfg = self.cfg;
        let record = self.get_mut(id)?;
        record.resonance_strength = charged(record, at, &cfg);
        record.charge_events.push(at);
        tracing::debug!(
            id = %id,
            charges = record.charge_events.len(),
            resonance = record.resonance_strength,
            "store charge"
        );
        Ok(record)
    }

    /// Attach an observed outcome.
    pub fn record_manifestation(
        &mut self,
        id: &SigilId,
        manifestation: Manifestation,
    ) -> SigilResult<&SigilRecord> {
        let record = self.get_mut(id)?;
        record.manifestations.push(manifestation);
        tracing::debug!(id = %id, "store manifestation");
        Ok(record)
    }

    /// Servitors in insertion order.
    pub fn servitors(&self) -> impl Iterator<Item = &Servitor> {
        self.servitors.iter()
    }

    /// Look up a servitor.
    pub fn servitor(&self, id: &str) -> Option<&Servitor> {
        self.servitors.iter().find(|s| s.id == id)
    }

    /// Append a servitor. Identifiers must be unique among servitors.
    pub fn add_servitor(&mut self, servitor: Servitor) -> SigilResult<&Servitor> {
        if self.servitor(&servitor.id).is_some() {
            return Err(SigilError::validation(format!(
                "duplicate servitor id '{}'",
                servitor.id
            )));
        }
        tracing::debug!(id = %servitor.id, "store add servitor");
        self.servitors.push(servitor);
        let idx = self.servitors.len() - 1;
        Ok(&self.servitors[idx])
    }

    /// Feed a servitor at `at`, raising its energy by [`crate::SERVITOR_FEED_BOOST`] up to 1.
    pub fn feed_servitor(&mut self, id: &str, at: DateTime<Utc>) -> SigilResult<&Servitor> {
        let servitor = self.servitor_mut(id)?;
        servitor.feed(at);
        tracing::debug!(id = %id, energy = servitor.energy, "store feed servitor");
        Ok(servitor)
    }

    /// Attach a reported outcome to a servitor.
    pub fn record_servitor_result(
        &mut self,
        id: &str,
        result: ServitorResult,
    ) -> SigilResult<&Servitor> {
        let servitor = self.servitor_mut(id)?;
        servitor.results.push(result);
        tracing::debug!(id = %id, "store servitor result");
        Ok(servitor)
    }

    /// Gnosis sessions in insertion order.
    pub fn gnosis_sessions(&self) -> impl Iterator<Item = &GnosisSession> {
        self.sessions.iter()
    }

    /// Log a gnosis session. Its id must be new and every charged sigil must exist.
    pub fn add_gnosis_session(&mut self, session: GnosisSession) -> SigilResult<&GnosisSession> {
        if self.sessions.iter().any(|s| s.id == session.id) {
            return Err(SigilError::validation(format!(
                "duplicate gnosis session id '{}'",
                session.id
            )));
        }
        self.check_refs(&session.sigils_charged)?;
        tracing::debug!(
            id = %session.id,
            sigils = session.sigils_charged.len(),
            "store add gnosis session"
        );
        self.sessions.push(session);
        let idx = self.sessions.len() - 1;
        Ok(&self.sessions[idx])
    }

    /// Synchronicity events in insertion order.
    pub fn synchronicities(&self) -> impl Iterator<Item = &SynchronicityEvent> {
        self.synchronicities.iter()
    }

    /// Log a synchronicity. Its id must be new and every related sigil must exist.
    pub fn add_synchronicity(
        &mut self,
        event: SynchronicityEvent,
    ) -> SigilResult<&SynchronicityEvent> {
        if self.synchronicities.iter().any(|e| e.id == event.id) {
            return Err(SigilError::validation(format!(
                "duplicate synchronicity id '{}'",
                event.id
            )));
        }
        self.check_refs(&event.related_sigils)?;
        tracing::debug!(id = %event.id, "store add synchronicity");
        self.synchronicities.push(event);
        let idx = self.synchronicities.len() - 1;
        Ok(&self.synchronicities[idx])
    }

    /// Load a store from a JSON document. A missing file yields an empty store.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, cfg: ResonanceConfig) -> SigilResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("store file missing; starting empty");
            return Ok(Self::with_config(cfg));
        }
        let bytes =
            std::fs::read(path).with_context(|| format!("read store '{}'", path.display()))?;
        let doc: StoreDocument = serde_json::from_slice(&bytes)
            .map_err(|e| SigilError::serde(format!("parse store '{}': {e}", path.display())))?;
        if doc.version != STORE_VERSION {
            return Err(SigilError::validation(format!(
                "unsupported store version {} (expected {STORE_VERSION})",
                doc.version
            )));
        }

        let mut store = Self::with_config(cfg);
        for record in doc.sigils {
            store.create(record)?;
        }
        for servitor in doc.servitors {
            store.add_servitor(servitor)?;
        }
        for session in doc.gnosis_sessions {
            store.add_gnosis_session(session)?;
        }
        for event in doc.synchronicities {
            store.add_synchronicity(event)?;
        }
        Ok(store)
    }

    /// Write the store as a JSON document via a sibling temp file and rename.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display(), count = self.len()))]
    pub fn save(&self, path: impl AsRef<Path>) -> SigilResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store dir '{}'", parent.display()))?;
        }

        let doc = StoreDocument {
            version: STORE_VERSION,
            sigils: self.records.clone(),
            servitors: self.servitors.clone(),
            gnosis_sessions: self.sessions.clone(),
            synchronicities: self.synchronicities.clone(),
        };
        let json = serde_json::to_vec_pretty(&doc)
            .map_err(|e| SigilError::serde(format!("encode store: {e}")))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("write '{}'", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("replace store '{}'", path.display()))?;
        Ok(())
    }

    fn get_mut(&mut self, id: &SigilId) -> SigilResult<&mut SigilRecord> {
        self.records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| SigilError::not_found(format!("sigil '{id}'")))
    }

    fn servitor_mut(&mut self, id: &str) -> SigilResult<&mut Servitor> {
        self.servitors
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SigilError::not_found(format!("servitor '{id}'")))
    }

    fn check_refs(&self, ids: &[SigilId]) -> SigilResult<()> {
        match ids.iter().find(|id| self.get(id).is_none()) {
            Some(missing) => Err(SigilError::not_found(format!("sigil '{missing}'"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/collection.rs"]
mod tests;

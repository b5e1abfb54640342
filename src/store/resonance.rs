use chrono::{DateTime, Utc};

use crate::store::record::{SigilRecord, clamp_finite};

const SECS_PER_DAY: f64 = 86_400.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// How stored resonance starts, grows on charge, and fades over time.
pub struct ResonanceConfig {
    /// Strength given to a new record.
    pub initial: f64,
    /// Added on each charge, after decay to the charge time.
    pub charge_boost: f64,
    /// Days for the strength to halve with no charge. Non-positive disables decay.
    pub half_life_days: f64,
    /// Decay never takes strength below this.
    pub floor: f64,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            initial: 0.5,
            charge_boost: 0.1,
            half_life_days: 30.0,
            floor: 0.0,
        }
    }
}

/// Resonance of `record` at `now`: the stored strength decayed from the last charge (or
/// creation when never charged). Times before that anchor read the stored strength as is.
pub fn resonance_at(record: &SigilRecord, now: DateTime<Utc>, cfg: &ResonanceConfig) -> f64 {
    let anchor = record.last_charged().unwrap_or(record.created_at);
    let stored = clamp_finite(record.resonance_strength, 0.0, 1.0);
    if cfg.half_life_days <= 0.0 || now <= anchor {
        return stored;
    }

    let elapsed_days = (now - anchor).num_milliseconds() as f64 / 1000.0 / SECS_PER_DAY;
    let floor = clamp_finite(cfg.floor, 0.0, 1.0);
    let decayed = stored * 0.5f64.powf(elapsed_days / cfg.half_life_days);
    decayed.max(floor.min(stored))
}

/// Strength after a charge at `at`.
pub(crate) fn charged(record: &SigilRecord, at: DateTime<Utc>, cfg: &ResonanceConfig) -> f64 {
    clamp_finite(resonance_at(record, at, cfg) + cfg.charge_boost, 0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/store/resonance.rs"]
mod tests;

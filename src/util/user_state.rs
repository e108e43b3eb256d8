use crate::models::raid::{CapacityUnit, RaidConfiguration, RaidLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DEFAULT_LEVEL:       RaidLevel    = RaidLevel::Raid5;
const DEFAULT_DRIVE_COUNT: i64          = 4;
const DEFAULT_DRIVE_SIZE:  f64          = 4.0;
const DEFAULT_UNIT:        CapacityUnit = CapacityUnit::Tb;

/// Last-used calculator inputs persisted across sessions.
/// Stored at ~/.local/share/raidcalc/state.json.
///
/// Level and unit are kept as plain strings so a hand-edited or stale value
/// falls back to the default instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserState {
    #[serde(default)]
    pub selected_level: String,

    #[serde(default)]
    pub drive_count: i64,

    #[serde(default)]
    pub drive_size: f64,

    #[serde(default)]
    pub unit: String,
}

impl UserState {
    pub fn path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("raidcalc").join("state.json"))
    }

    pub fn load() -> Self {
        match Self::path() {
            Some(p) => Self::load_from(&p),
            None    => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t)  => t,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&text) {
            Ok(s)  => s,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable state file");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(s) => {
                if let Err(e) = std::fs::write(path, s) {
                    warn!(path = %path.display(), error = %e, "failed to save state");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize state"),
        }
    }

    pub fn from_config(cfg: &RaidConfiguration) -> Self {
        Self {
            selected_level: cfg.level.key().to_string(),
            drive_count:    cfg.drive_count,
            drive_size:     cfg.drive_size,
            unit:           cfg.unit.key().to_string(),
        }
    }

    /// Rebuild a configuration, substituting defaults for anything missing,
    /// unparsable or zero.
    pub fn to_config(&self) -> RaidConfiguration {
        let level = self.selected_level.parse().unwrap_or(DEFAULT_LEVEL);
        let unit  = self.unit.parse().unwrap_or(DEFAULT_UNIT);
        let drive_count = if self.drive_count == 0 { DEFAULT_DRIVE_COUNT } else { self.drive_count };
        let drive_size  = if self.drive_size == 0.0 || !self.drive_size.is_finite() {
            DEFAULT_DRIVE_SIZE
        } else {
            self.drive_size
        };
        debug!(level = level.key(), drive_count, drive_size, unit = unit.key(), "restored inputs");
        RaidConfiguration::new(level, drive_count, drive_size, unit)
    }
}

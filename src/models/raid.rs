use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a level or unit cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown RAID level '{0}' (expected raid0, raid1, raid5, raid6, raid10 or jbod)")]
    Level(String),
    #[error("unknown capacity unit '{0}' (expected gb or tb)")]
    Unit(String),
}

// ── RAID level ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaidLevel {
    Raid0,   // striped, no redundancy
    Raid1,   // mirrored
    Raid5,   // single parity
    Raid6,   // dual parity
    Raid10,  // stripe of mirrored pairs
    Jbod,    // concatenated, independent disks
}

impl RaidLevel {
    /// Selector order.
    pub const ALL: [RaidLevel; 6] = [
        RaidLevel::Raid0,
        RaidLevel::Raid1,
        RaidLevel::Raid5,
        RaidLevel::Raid6,
        RaidLevel::Raid10,
        RaidLevel::Jbod,
    ];

    /// Short label shown in the level selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Raid0  => "R 0",
            Self::Raid1  => "R 1",
            Self::Raid5  => "R 5",
            Self::Raid6  => "R 6",
            Self::Raid10 => "R 10",
            Self::Jbod   => "JBOD",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Raid0  => "RAID 0",
            Self::Raid1  => "RAID 1",
            Self::Raid5  => "RAID 5",
            Self::Raid6  => "RAID 6",
            Self::Raid10 => "RAID 10",
            Self::Jbod   => "JBOD",
        }
    }

    /// Stable key used in the state file, config and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Raid0  => "raid0",
            Self::Raid1  => "raid1",
            Self::Raid5  => "raid5",
            Self::Raid6  => "raid6",
            Self::Raid10 => "raid10",
            Self::Jbod   => "jbod",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RaidLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s.trim().to_ascii_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
        if norm == "jbod" {
            return Ok(Self::Jbod);
        }
        // The raid/r prefix only applies to numbered levels
        let digits = norm.strip_prefix("raid").or_else(|| norm.strip_prefix('r')).unwrap_or(norm.as_str());
        match digits {
            "0"  => Ok(Self::Raid0),
            "1"  => Ok(Self::Raid1),
            "5"  => Ok(Self::Raid5),
            "6"  => Ok(Self::Raid6),
            "10" => Ok(Self::Raid10),
            _    => Err(ParseError::Level(s.to_string())),
        }
    }
}

// ── Capacity unit ─────────────────────────────────────────────────────

/// Display label only; the calculator never converts between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityUnit {
    Gb,
    Tb,
}

impl CapacityUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Gb => "gb",
            Self::Tb => "tb",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Gb => Self::Tb,
            Self::Tb => Self::Gb,
        }
    }
}

impl fmt::Display for CapacityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CapacityUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gb" => Ok(Self::Gb),
            "tb" => Ok(Self::Tb),
            _    => Err(ParseError::Unit(s.to_string())),
        }
    }
}

// ── Input / output records ────────────────────────────────────────────

/// Calculator input. Nothing is enforced here; `calculator::validate`
/// detects illegal drive counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaidConfiguration {
    pub level:       RaidLevel,
    pub drive_count: i64,
    /// Capacity of one drive, already expressed in `unit`.
    pub drive_size:  f64,
    pub unit:        CapacityUnit,
}

impl RaidConfiguration {
    pub fn new(level: RaidLevel, drive_count: i64, drive_size: f64, unit: CapacityUnit) -> Self {
        Self { level, drive_count, drive_size, unit }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaidResult {
    /// Same unit as the configuration's `drive_size`.
    pub usable_capacity:     f64,
    /// Text rather than a count: RAID 10 tolerance depends on which drives fail.
    pub failures_tolerated:  String,
    pub speed_rating:        u8,   // 1–5
    pub availability_rating: u8,   // 1–5
    /// Present iff the drive count is illegal for the level.
    pub warning_message:     Option<String>,
}

impl RaidResult {
    pub fn is_valid(&self) -> bool {
        self.warning_message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_common_spellings() {
        assert_eq!("raid5".parse::<RaidLevel>(), Ok(RaidLevel::Raid5));
        assert_eq!("RAID 10".parse::<RaidLevel>(), Ok(RaidLevel::Raid10));
        assert_eq!("R 6".parse::<RaidLevel>(), Ok(RaidLevel::Raid6));
        assert_eq!("0".parse::<RaidLevel>(), Ok(RaidLevel::Raid0));
        assert_eq!("JBOD".parse::<RaidLevel>(), Ok(RaidLevel::Jbod));
        assert_eq!(" raid1 ".parse::<RaidLevel>(), Ok(RaidLevel::Raid1));
    }

    #[test]
    fn level_rejects_unknown() {
        assert_eq!("raid3".parse::<RaidLevel>(), Err(ParseError::Level("raid3".into())));
        assert!("".parse::<RaidLevel>().is_err());
        assert!("rjbod".parse::<RaidLevel>().is_err());
        assert!("RAID JBOD".parse::<RaidLevel>().is_err());
        assert!("raid".parse::<RaidLevel>().is_err());
    }

    #[test]
    fn level_key_round_trips_through_from_str() {
        for level in RaidLevel::ALL {
            assert_eq!(level.key().parse::<RaidLevel>(), Ok(level));
            assert_eq!(level.label().parse::<RaidLevel>(), Ok(level));
        }
    }

    #[test]
    fn level_cycling_wraps() {
        assert_eq!(RaidLevel::Raid0.next(), RaidLevel::Raid1);
        assert_eq!(RaidLevel::Jbod.next(), RaidLevel::Raid0);
        assert_eq!(RaidLevel::Raid0.prev(), RaidLevel::Jbod);
        assert_eq!(RaidLevel::Raid10.prev(), RaidLevel::Raid6);
    }

    #[test]
    fn unit_parse_and_toggle() {
        assert_eq!("GB".parse::<CapacityUnit>(), Ok(CapacityUnit::Gb));
        assert_eq!("tb".parse::<CapacityUnit>(), Ok(CapacityUnit::Tb));
        assert!("pb".parse::<CapacityUnit>().is_err());
        assert_eq!(CapacityUnit::Gb.toggle(), CapacityUnit::Tb);
        assert_eq!(CapacityUnit::Tb.toggle().toggle(), CapacityUnit::Tb);
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid10, 8, 2.0, CapacityUnit::Tb);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"raid10\""));
        assert!(json.contains("\"tb\""));
        let back: RaidConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}

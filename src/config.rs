use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color theme: default, dracula, gruvbox, nord
    pub theme: String,
    /// Upper bound of the drive-count stepper in the TUI (the calculator itself has none)
    pub max_drives: i64,
    /// Restore and save the last-used inputs between sessions
    pub remember_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn  => "warn",
            Self::Info  => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LoggingLevel,
    /// Write a log file under the data directory (the TUI never logs to the terminal)
    pub to_file: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { theme: "default".into(), max_drives: 24, remember_last: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: LoggingLevel::Info, to_file: true }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

/// What happened while loading the config. Logged by the caller once the
/// subscriber is up.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(PathBuf),
    WroteDefaults(PathBuf),
    DefaultsNotWritten { path: PathBuf, error: String },
    Unreadable { path: PathBuf, error: String },
    NoConfigDir,
}

impl LoadOutcome {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!(path = %path.display(), "config loaded"),
            Self::WroteDefaults(path) => info!(path = %path.display(), "wrote default config"),
            Self::DefaultsNotWritten { path, error } => {
                warn!(path = %path.display(), error = %error, "could not write default config")
            }
            Self::Unreadable { path, error } => {
                warn!(path = %path.display(), error = %error, "config unreadable, using defaults")
            }
            Self::NoConfigDir => warn!("no config directory, using defaults"),
        }
    }
}

impl Config {
    pub fn load() -> (Self, LoadOutcome) {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None       => (Config::default(), LoadOutcome::NoConfigDir),
        }
    }

    /// Read `path`, or write the defaults there on first run (best-effort).
    pub fn load_from(path: &Path) -> (Self, LoadOutcome) {
        if !path.exists() {
            let outcome = match try_write_defaults(path) {
                Ok(())  => LoadOutcome::WroteDefaults(path.to_path_buf()),
                Err(e)  => LoadOutcome::DefaultsNotWritten { path: path.to_path_buf(), error: e.to_string() },
            };
            return (Config::default(), outcome);
        }
        match try_load(path) {
            Ok(c)  => (c, LoadOutcome::Loaded(path.to_path_buf())),
            Err(e) => (
                Config::default(),
                LoadOutcome::Unreadable { path: path.to_path_buf(), error: e.to_string() },
            ),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("raidcalc").join("raidcalc.toml"))
    }

    /// Stepper bound, never below one drive.
    pub fn max_drives(&self) -> i64 {
        self.general.max_drives.max(1)
    }
}

fn try_load(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# raidcalc configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_use_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.general.max_drives, 24);
        assert!(cfg.general.remember_last);
        assert_eq!(cfg.logging.level, LoggingLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: Config = toml::from_str("[general]\nmax_drives = 48\n[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(cfg.general.max_drives, 48);
        assert_eq!(cfg.general.theme, "default");
        assert_eq!(cfg.logging.level, LoggingLevel::Debug);
        assert!(cfg.logging.to_file);
    }

    #[test]
    fn max_drives_never_below_one() {
        let mut cfg = Config::default();
        cfg.general.max_drives = 0;
        assert_eq!(cfg.max_drives(), 1);
    }

    #[test]
    fn written_defaults_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raidcalc").join("raidcalc.toml");
        try_write_defaults(&path).unwrap();
        let cfg = try_load(&path).unwrap();
        assert_eq!(cfg.general.theme, "default");
        assert_eq!(cfg.general.max_drives, 24);
    }

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raidcalc").join("raidcalc.toml");
        let (cfg, outcome) = Config::load_from(&path);
        assert_eq!(outcome, LoadOutcome::WroteDefaults(path.clone()));
        assert_eq!(cfg.general.max_drives, 24);
        assert!(path.exists());

        let (_, outcome) = Config::load_from(&path);
        assert_eq!(outcome, LoadOutcome::Loaded(path));
    }

    #[test]
    fn unreadable_file_reports_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raidcalc.toml");
        fs::write(&path, "[general]\nmax_drives = \"many\"\n").unwrap();

        let (cfg, outcome) = Config::load_from(&path);
        assert_eq!(cfg.general.max_drives, 24);
        match outcome {
            LoadOutcome::Unreadable { path: p, error } => {
                assert_eq!(p, path);
                assert!(!error.is_empty());
            }
            other => panic!("expected Unreadable, got {:?}", other),
        }
        // The broken file is left alone
        assert!(fs::read_to_string(&path).unwrap().contains("many"));
    }
}

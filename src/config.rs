use crate::consts;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use simplelog::WriteLogger;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Milliseconds between movements of the snake
    tick_period_ms: u64,

    /// Seed for the random number generator used to place apples.  If not
    /// set, the generator is seeded from the operating system.
    seed: Option<u64>,

    /// Settings about logging
    log: LogConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_period_ms: consts::TICK_PERIOD_MS,
            seed: None,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("segsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        if config.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(config)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Return the random number generator to use for placing apples
    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub(crate) fn log(&self) -> &LogConfig {
        &self.log
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  The terminal is taken up by the game,
    /// so if this is not set, nothing is logged.
    file: Option<PathBuf>,

    /// Most verbose level of messages to log
    level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// Install a global logger that writes to the configured file, creating
    /// the file's parent directories if necessary.  Does nothing if no file
    /// is configured.
    pub(crate) fn install(&self) -> Result<(), LogError> {
        let Some(path) = self.file.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(LogError::Create)?;
        }
        let fp = fs_err::File::create(path).map_err(LogError::Create)?;
        WriteLogger::init(self.level, simplelog::Config::default(), fp)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("tick-period-ms must be greater than zero")]
    ZeroTick,
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to create log file")]
    Create(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut tmpfile = NamedTempFile::new().unwrap();
        tmpfile.write_all(src.as_bytes()).unwrap();
        tmpfile.flush().unwrap();
        Config::load(tmpfile.path(), false)
    }

    #[test]
    fn empty() {
        let cfg = load_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.tick_period(), Duration::from_millis(500));
        assert_eq!(cfg.log().level, LevelFilter::Info);
        assert_eq!(cfg.log().file, None);
    }

    #[test]
    fn full() {
        let cfg = load_str(concat!(
            "tick-period-ms = 150\n",
            "seed = 42\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/segsnake.log\"\n",
            "level = \"trace\"\n",
        ))
        .unwrap();
        assert_eq!(cfg.tick_period(), Duration::from_millis(150));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log().file, Some(PathBuf::from("/tmp/segsnake.log")));
        assert_eq!(cfg.log().level, LevelFilter::Trace);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = load_str("seed = 1234\n").unwrap();
        assert_eq!(cfg.rng().next_u64(), cfg.rng().next_u64());
    }

    #[test]
    fn zero_tick_period() {
        let r = load_str("tick-period-ms = 0\n");
        assert!(matches!(r, Err(ConfigError::ZeroTick)));
    }

    #[test]
    fn bad_level() {
        let r = load_str("[log]\nlevel = \"loud\"\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn no_log_file() {
        assert!(LogConfig::default().install().is_ok());
    }
}

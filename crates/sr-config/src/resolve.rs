//! Layered configuration resolution.
//!
//! Precedence, lowest to highest:
//! 1. built-in defaults
//! 2. config file (`--config`, `SORTREPLAY_CONFIG`, or the XDG location)
//! 3. preset (`--preset` or `SORTREPLAY_PRESET`)
//! 4. individual environment variables (`SORTREPLAY_SPEED_MS`, ...)
//! 5. explicit CLI values

use std::path::{Path, PathBuf};

use sr_common::{Error, Result};
use sr_trace::AlgorithmKind;
use tracing::debug;

use crate::playback::{InputSize, PlaybackConfig};
use crate::preset::{get_preset, PresetName};
use crate::ENV_PREFIX;

/// Where to look for a config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path given on the command line. Must exist when set.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    /// `$XDG_CONFIG_HOME/sortreplay/config.toml`, if a config dir exists.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sortreplay").join("config.toml"))
    }

    /// Pick the file to load. `Ok(None)` means run on defaults.
    fn locate(&self, env: &dyn Fn(&str) -> Option<String>) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit {
            return require_file(path).map(Some);
        }
        if let Some(path) = env(&format!("{ENV_PREFIX}CONFIG")) {
            return require_file(Path::new(&path)).map(Some);
        }
        Ok(Self::default_location().filter(|p| p.is_file()))
    }
}

fn require_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::InvalidConfigFile {
            path: path.display().to_string(),
            reason: "file not found".to_string(),
        })
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub algorithm: Option<AlgorithmKind>,
    pub speed_ms: Option<u64>,
    pub size: Option<InputSize>,
    pub seed: Option<u64>,
    pub preset: Option<PresetName>,
}

/// Final configuration plus the file it came from, if any.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: PlaybackConfig,
    pub source: Option<PathBuf>,
}

/// Resolve using the process environment.
pub fn resolve_config(paths: &ConfigPaths, overrides: &ConfigOverrides) -> Result<ResolvedConfig> {
    resolve_config_with_env(paths, overrides, &|key| std::env::var(key).ok())
}

/// Resolve with an injectable environment lookup.
pub fn resolve_config_with_env(
    paths: &ConfigPaths,
    overrides: &ConfigOverrides,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let source = paths.locate(env)?;
    let mut config = match &source {
        Some(path) => load_file(path)?,
        None => PlaybackConfig::default(),
    };

    let preset = match overrides.preset {
        Some(p) => Some(p),
        None => env_value(env, "PRESET")?,
    };
    if let Some(preset) = preset {
        debug!(%preset, "applying preset");
        let seed = config.seed;
        config = PlaybackConfig {
            seed,
            ..get_preset(preset)
        };
    }

    apply_env(&mut config, env)?;

    if let Some(algorithm) = overrides.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(speed_ms) = overrides.speed_ms {
        config.speed_ms = speed_ms;
    }
    if let Some(size) = overrides.size {
        config.size = size.get();
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }

    config.validate().into_result()?;
    debug!(
        algorithm = %config.algorithm,
        speed_ms = config.speed_ms,
        size = config.size,
        source = ?source,
        "configuration resolved"
    );
    Ok(ResolvedConfig { config, source })
}

/// Load a config file, choosing the format by extension (`.json` or TOML).
pub fn load_file(path: &Path) -> Result<PlaybackConfig> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        serde_json::from_str(&text).map_err(|e| e.to_string())
    } else {
        toml::from_str(&text).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| Error::InvalidConfigFile {
        path: path.display().to_string(),
        reason,
    })
}

fn apply_env(config: &mut PlaybackConfig, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(algorithm) = env_value::<AlgorithmKind>(env, "ALGORITHM")? {
        config.algorithm = algorithm;
    }
    if let Some(speed_ms) = env_value::<u64>(env, "SPEED_MS")? {
        config.speed_ms = speed_ms;
    }
    if let Some(size) = env_value::<InputSize>(env, "SIZE")? {
        config.size = size.get();
    }
    if let Some(seed) = env_value::<u64>(env, "SEED")? {
        config.seed = Some(seed);
    }
    Ok(())
}

fn env_value<T>(env: &dyn Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let key = format!("{ENV_PREFIX}{name}");
    match env(&key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{key}={raw}: {e}"))),
    }
}

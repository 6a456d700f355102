//! sortreplay configuration loading and validation.
//!
//! This crate provides:
//! - Typed playback settings (`PlaybackConfig`, `Speed`, `InputSize`)
//! - Config resolution (CLI → env → file → defaults)
//! - Bounds validation that reports every violation at once
//! - Named presets for common setups

pub mod playback;
pub mod preset;
pub mod resolve;
pub mod validate;

pub use playback::{InputSize, PlaybackConfig, Speed};
pub use preset::{get_preset, list_presets, PresetInfo, PresetName};
pub use resolve::{resolve_config, resolve_config_with_env, ConfigOverrides, ConfigPaths, ResolvedConfig};
pub use validate::{ValidationError, ValidationResult};

/// Smallest accepted auto-play period.
pub const SPEED_MIN_MS: u64 = 10;
/// Largest accepted auto-play period.
pub const SPEED_MAX_MS: u64 = 200;
pub const SPEED_DEFAULT_MS: u64 = 80;

/// Default number of values in a generated input.
pub const SIZE_DEFAULT: usize = 40;
/// Slider bounds offered to presentation layers.
pub const SIZE_SLIDER_MIN: usize = 10;
pub const SIZE_SLIDER_MAX: usize = 150;
pub const SIZE_SLIDER_STEP: usize = 5;
/// Hard upper bound on input length. Every step snapshots the whole array,
/// so quadratic sorts grow as n³ in memory.
pub const MAX_SIZE: usize = 300;

/// Inclusive range random inputs are drawn from.
pub const VALUE_MIN: i32 = 5;
pub const VALUE_MAX: i32 = 100;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "SORTREPLAY_";

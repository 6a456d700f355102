//! Playback settings and their validated building blocks.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sr_common::{Error, Result};
use sr_trace::AlgorithmKind;

use crate::{
    MAX_SIZE, SIZE_DEFAULT, SPEED_DEFAULT_MS, SPEED_MAX_MS, SPEED_MIN_MS, VALUE_MAX, VALUE_MIN,
};

/// Complete playback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub algorithm: AlgorithmKind,

    /// Auto-play tick period in milliseconds.
    pub speed_ms: u64,

    /// Length of generated inputs.
    pub size: usize,

    /// Seed for generated inputs; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub value_min: i32,
    pub value_max: i32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            speed_ms: SPEED_DEFAULT_MS,
            size: SIZE_DEFAULT,
            seed: None,
            value_min: VALUE_MIN,
            value_max: VALUE_MAX,
        }
    }
}

impl PlaybackConfig {
    /// Validated tick period.
    pub fn speed(&self) -> Result<Speed> {
        Speed::from_millis(self.speed_ms)
    }

    /// Validated input length.
    pub fn input_size(&self) -> Result<InputSize> {
        InputSize::new(self.size)
    }
}

/// Auto-play tick period, always within `SPEED_MIN_MS..=SPEED_MAX_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Speed(u64);

impl Speed {
    pub fn from_millis(ms: u64) -> Result<Self> {
        if (SPEED_MIN_MS..=SPEED_MAX_MS).contains(&ms) {
            Ok(Speed(ms))
        } else {
            Err(Error::SpeedOutOfRange {
                speed_ms: ms,
                min: SPEED_MIN_MS,
                max: SPEED_MAX_MS,
            })
        }
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn period(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(SPEED_DEFAULT_MS)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

/// Length of an input array, always within `0..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InputSize(usize);

impl InputSize {
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_SIZE {
            return Err(Error::InvalidSize(format!(
                "{n} exceeds the maximum of {MAX_SIZE}"
            )));
        }
        Ok(InputSize(n))
    }

    /// Accept a numeric size from an untyped source.
    ///
    /// Rejects NaN, infinities, negatives and fractions instead of rounding.
    pub fn from_f64(raw: f64) -> Result<Self> {
        if !raw.is_finite() {
            return Err(Error::InvalidSize(format!("{raw} is not a finite number")));
        }
        if raw < 0.0 {
            return Err(Error::InvalidSize(format!("{raw} is negative")));
        }
        if raw.fract() != 0.0 {
            return Err(Error::InvalidSize(format!("{raw} is not a whole number")));
        }
        if raw > MAX_SIZE as f64 {
            return Err(Error::InvalidSize(format!(
                "{raw} exceeds the maximum of {MAX_SIZE}"
            )));
        }
        Ok(InputSize(raw as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for InputSize {
    fn default() -> Self {
        InputSize(SIZE_DEFAULT)
    }
}

impl FromStr for InputSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidSize(format!("'{s}' is not a number")))?;
        InputSize::from_f64(raw)
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

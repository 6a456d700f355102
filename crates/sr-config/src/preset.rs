//! Named configuration presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sr_common::Error;
use sr_trace::AlgorithmKind;

use crate::playback::PlaybackConfig;
use crate::{SIZE_SLIDER_MAX, SIZE_SLIDER_MIN, SPEED_MAX_MS, SPEED_MIN_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetName {
    /// Few bars, slowest speed: every step is easy to follow.
    Classroom,
    /// Same as the built-in defaults.
    Default,
    /// Largest slider size at the fastest speed.
    Stress,
}

impl PresetName {
    pub const ALL: [PresetName; 3] = [PresetName::Classroom, PresetName::Default, PresetName::Stress];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetName::Classroom => "classroom",
            PresetName::Default => "default",
            PresetName::Stress => "stress",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown preset '{s}'")))
    }
}

/// Short description for listings.
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub name: PresetName,
    pub description: &'static str,
}

pub fn get_preset(name: PresetName) -> PlaybackConfig {
    let base = PlaybackConfig::default();
    match name {
        PresetName::Classroom => PlaybackConfig {
            algorithm: AlgorithmKind::Insertion,
            speed_ms: SPEED_MAX_MS,
            size: SIZE_SLIDER_MIN,
            ..base
        },
        PresetName::Default => base,
        PresetName::Stress => PlaybackConfig {
            speed_ms: SPEED_MIN_MS,
            size: SIZE_SLIDER_MAX,
            ..base
        },
    }
}

pub fn list_presets() -> Vec<PresetInfo> {
    vec![
        PresetInfo {
            name: PresetName::Classroom,
            description: "10 values, insertion sort, 200 ms per step",
        },
        PresetInfo {
            name: PresetName::Default,
            description: "40 values, bubble sort, 80 ms per step",
        },
        PresetInfo {
            name: PresetName::Stress,
            description: "150 values, 10 ms per step",
        },
    ]
}

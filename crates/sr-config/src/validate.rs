//! Semantic validation of playback configuration.

use sr_common::{Error, Result};
use thiserror::Error;

use crate::playback::PlaybackConfig;
use crate::{MAX_SIZE, SPEED_MAX_MS, SPEED_MIN_MS};

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a single configuration error listing all violations.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::Config(joined))
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(ValidationError { field, message });
    }
}

impl PlaybackConfig {
    /// Check all bounds without stopping at the first failure.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !(SPEED_MIN_MS..=SPEED_MAX_MS).contains(&self.speed_ms) {
            result.push(
                "speed_ms",
                format!(
                    "{} is outside {SPEED_MIN_MS}..={SPEED_MAX_MS}",
                    self.speed_ms
                ),
            );
        }
        if self.size > MAX_SIZE {
            result.push(
                "size",
                format!("{} exceeds the maximum of {MAX_SIZE}", self.size),
            );
        }
        if self.value_min > self.value_max {
            result.push(
                "value_min",
                format!(
                    "{} is greater than value_max {}",
                    self.value_min, self.value_max
                ),
            );
        }

        result
    }
}

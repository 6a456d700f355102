//! A single recorded operation.

use serde::{Deserialize, Serialize};

/// What a step represents.
///
/// `Mutate` covers every write to the array: swaps, insertion shifts,
/// final key placement and merge write-backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Mutate,
}

/// One elementary operation together with the array state right after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Full snapshot of the array after this operation.
    pub arr: Vec<i32>,
    /// First index involved. Serialized as `-1` when absent.
    #[serde(with = "index")]
    pub a: Option<usize>,
    /// Second index involved. Serialized as `-1` when absent.
    #[serde(with = "index")]
    pub b: Option<usize>,
    pub kind: StepKind,
}

impl Step {
    /// Idle marker framing every trace.
    pub fn idle(arr: Vec<i32>) -> Self {
        Self {
            arr,
            a: None,
            b: None,
            kind: StepKind::Compare,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.a.is_none() && self.b.is_none() && self.kind == StepKind::Compare
    }

    /// Counts toward comparison totals.
    pub fn is_compare(&self) -> bool {
        self.kind == StepKind::Compare && self.a.is_some() && self.b.is_some()
    }

    /// Counts toward swap totals.
    pub fn is_mutate(&self) -> bool {
        self.kind == StepKind::Mutate
    }

    /// Whether `idx` is one of the highlighted positions.
    pub fn involves(&self, idx: usize) -> bool {
        self.a == Some(idx) || self.b == Some(idx)
    }
}

/// Wire form for optional indices: `-1` stands for "not applicable".
mod index {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(idx) => serializer.serialize_u64(*idx as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        match raw {
            -1 => Ok(None),
            n if n < 0 => Err(D::Error::custom(format!(
                "step index must be -1 or non-negative, got {n}"
            ))),
            n => usize::try_from(n).map(Some).map_err(D::Error::custom),
        }
    }
}

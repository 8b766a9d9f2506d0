//! Run diagnostics: wall-clock timing and counts for each stage.
//!
//! The application shell measures each simulated stage with `web-time`
//! (`performance.now()` on WASM, `std::time::Instant` on native) and
//! records the results here. Durations are serialized as fractional
//! seconds (`f64`) for JSON compatibility, since
//! `std::time::Duration` does not implement serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Timing and output size of one completed stage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTiming {
    /// Wall-clock duration of the stage, including the simulated
    /// latency (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Number of records the stage produced.
    pub produced: usize,
}

/// Timings for the most recent analysis run.
///
/// Stages that have not run yet (or were reset) are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTiming {
    /// Segmentation stage, when it has completed.
    pub segmentation: Option<StageTiming>,
    /// Classification stage, when it has completed.
    pub classification: Option<StageTiming>,
}

impl RunTiming {
    /// Total wall-clock time across the completed stages.
    #[must_use]
    pub fn total(&self) -> Duration {
        let seg = self.segmentation.map_or(Duration::ZERO, |s| s.duration);
        let cls = self.classification.map_or(Duration::ZERO, |s| s.duration);
        seg + cls
    }
}

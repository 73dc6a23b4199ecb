//! Controller configuration.

use std::time::Duration;

use crate::{MzError, MzResult};

/// Probability that the random agent turns even when the way ahead is open.
pub const DEFAULT_TURN_PROBABILITY: f64 = 0.125;

/// Settings shared by both navigation controllers.
///
/// Typically built in code or loaded from JSON by the host application (with
/// the `serde` feature) and handed to a controller's `from_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Pause after every step, in milliseconds.  0 disables pacing.
    pub delay_ms: u64,

    /// Master RNG seed.  The same seed reproduces the same run.
    pub seed: u64,

    /// Random agent only: chance per step of choosing a new random direction
    /// while the cell ahead is still open.
    pub turn_probability: f64,
}

impl NavConfig {
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Reject settings no controller can honour.
    pub fn validate(&self) -> MzResult<()> {
        if !(0.0..=1.0).contains(&self.turn_probability) {
            return Err(MzError::Config(format!(
                "turn_probability must be within [0, 1], got {}",
                self.turn_probability
            )));
        }
        Ok(())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            delay_ms:         0,
            seed:             42,
            turn_probability: DEFAULT_TURN_PROBABILITY,
        }
    }
}

//! Per-instance mover configuration.
//!
//! Configs are fixed for the lifetime of a mover; to change one, build a new
//! mover.

use wp_path::TraversalPolicy;

use crate::{Interpolation, MotionError, MotionResult};

/// Configuration for a [`PathFollower`][crate::PathFollower].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct FollowerConfig {
    pub policy:            TraversalPolicy,
    /// Units per second (`LinearStep`) or decay rate (`Exponential`).
    pub speed:             f32,
    /// The cursor advances once the entity is strictly closer than this.
    pub arrival_tolerance: f32,
    pub interpolation:     Interpolation,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            policy:            TraversalPolicy::Bounce,
            speed:             1.0,
            arrival_tolerance: 0.1,
            interpolation:     Interpolation::LinearStep,
        }
    }
}

impl FollowerConfig {
    pub fn validate(&self) -> MotionResult<()> {
        non_negative("speed", self.speed)?;
        non_negative("arrival_tolerance", self.arrival_tolerance)
    }
}

/// Configuration for a [`TimedPathWalker`][crate::TimedPathWalker].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct WalkerConfig {
    pub policy:        TraversalPolicy,
    pub speed:         f32,
    pub interpolation: Interpolation,
    /// Seconds of accumulated tick time between automatic steps.
    pub delay_secs:    f32,
    /// Whether automatic stepping starts enabled.
    pub enabled:       bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            policy:        TraversalPolicy::Bounce,
            speed:         1.0,
            interpolation: Interpolation::LinearStep,
            delay_secs:    2.0,
            enabled:       true,
        }
    }
}

impl WalkerConfig {
    pub fn validate(&self) -> MotionResult<()> {
        non_negative("speed", self.speed)?;
        non_negative("delay_secs", self.delay_secs)
    }
}

fn non_negative(field: &str, value: f32) -> MotionResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::Config(format!(
            "{field} must be finite and non-negative, got {value}"
        )))
    }
}

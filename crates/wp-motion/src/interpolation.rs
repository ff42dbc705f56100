//! Interpolation policies.

use wp_core::{Position, ease_towards, move_towards};

/// How a mover closes the distance to its current waypoint each tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Interpolation {
    /// Constant speed; `speed` is world units per second.  The step is
    /// clamped to the remaining distance.
    #[default]
    LinearStep,
    /// Proportional easing; `speed` is the decay rate per second.
    Exponential,
}

impl Interpolation {
    /// One tick's movement from `from` toward `to`.
    #[inline]
    pub fn step(self, from: Position, to: Position, speed: f32, dt: f32) -> Position {
        match self {
            Interpolation::LinearStep  => move_towards(from, to, speed * dt),
            Interpolation::Exponential => ease_towards(from, to, speed, dt),
        }
    }
}

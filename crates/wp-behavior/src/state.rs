//! Behavior state sets.

use std::fmt;

/// Bound for a closed set of behavior states.
///
/// Any small `Copy + Eq` enum qualifies; the machine never inspects the
/// variants.
pub trait BehaviorState: Copy + Eq + fmt::Debug + 'static {}

impl<T: Copy + Eq + fmt::Debug + 'static> BehaviorState for T {}

/// Stock state set for creature AI (ground and flying enemies).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CreatureState {
    Idle,
    Walk,
    Chase,
    Detect,
    Attack,
    Scared,
    RunAway,
    HideRecollect,
}

impl CreatureState {
    pub fn as_str(self) -> &'static str {
        match self {
            CreatureState::Idle          => "idle",
            CreatureState::Walk          => "walk",
            CreatureState::Chase         => "chase",
            CreatureState::Detect        => "detect",
            CreatureState::Attack        => "attack",
            CreatureState::Scared        => "scared",
            CreatureState::RunAway       => "run_away",
            CreatureState::HideRecollect => "hide_recollect",
        }
    }

    /// `true` for states in which the creature is engaging a target.
    #[inline]
    pub fn is_hostile(self) -> bool {
        matches!(self, CreatureState::Chase | CreatureState::Attack)
    }
}

impl fmt::Display for CreatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Traversal policies and cursor direction.

use std::fmt;

/// How a cursor behaves when it reaches the end of its path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TraversalPolicy {
    /// Reverse at each end: `0, 1, 2, 1, 0, 1, …`.
    #[default]
    Bounce,
    /// Wrap from the last point to the first: `0, 1, 2, 0, 1, …`.
    Loop,
}

impl TraversalPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalPolicy::Bounce => "bounce",
            TraversalPolicy::Loop   => "loop",
        }
    }
}

impl fmt::Display for TraversalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a cursor is currently sweeping its path.
///
/// Only meaningful under [`TraversalPolicy::Bounce`]; loop cursors are always
/// `Forward`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

//! Immutable waypoint sequences.

use std::sync::Arc;

use wp_core::Position;

/// An ordered, immutable sequence of waypoints.
///
/// Backed by `Arc<[Position]>`: cloning shares the points, so a cursor, its
/// [`Sweep`][crate::Sweep]s, and the owning entity's config can all hold the
/// same sequence.  The sequence cannot change while anything traverses it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Position>", into = "Vec<Position>")
)]
pub struct Waypoints(Arc<[Position]>);

impl Waypoints {
    pub fn new(points: Vec<Position>) -> Self {
        Self(points.into())
    }

    /// A path with no points.  Cursors over it never have a current target.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Position> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Waypoints {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Position>> for Waypoints {
    fn from(points: Vec<Position>) -> Self {
        Self::new(points)
    }
}

impl From<Waypoints> for Vec<Position> {
    fn from(path: Waypoints) -> Self {
        path.0.to_vec()
    }
}

impl FromIterator<Position> for Waypoints {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

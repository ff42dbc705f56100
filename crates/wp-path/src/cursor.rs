//! The path cursor — explicit traversal state over a waypoint sequence.

use log::trace;
use wp_core::Position;

use crate::{Direction, PathError, PathResult, TraversalPolicy, Waypoints};

/// Mutable traversal state over a fixed [`Waypoints`] sequence.
///
/// The cursor exposes a stable "current target" and is advanced by discrete
/// calls: [`next`][Self::next] on arrival or timer expiry,
/// [`previous`][Self::previous] / [`set_index`][Self::set_index] /
/// [`reset`][Self::reset] for external re-seeking.
///
/// # Invariant
///
/// `index < waypoints.len()` whenever the path is non-empty.  An empty path
/// has no current target and every mutator except `set_index` is a no-op; a
/// single-point path is stationary.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCursor {
    waypoints: Waypoints,
    index:     usize,
    direction: Direction,
    policy:    TraversalPolicy,
}

impl PathCursor {
    /// Bind a cursor to `waypoints`, positioned at index 0 moving forward.
    pub fn new(waypoints: impl Into<Waypoints>, policy: TraversalPolicy) -> Self {
        Self {
            waypoints: waypoints.into(),
            index:     0,
            direction: Direction::Forward,
            policy,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The waypoint at the cursor, or `None` for an empty path.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.waypoints.get(self.index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    #[inline]
    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Return to index 0, moving forward.
    pub fn reset(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = 0;
        self.direction = Direction::Forward;
    }

    /// Advance one step according to the policy.
    ///
    /// Under `Bounce` the endpoint check runs before the step, so a cursor
    /// sitting on either end reverses on this very call.  No-op for paths of
    /// fewer than two points.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.len();
        if len <= 1 {
            return;
        }

        match self.policy {
            TraversalPolicy::Bounce => {
                if self.index == 0 {
                    self.direction = Direction::Forward;
                }
                if self.index >= len - 1 {
                    self.direction = Direction::Backward;
                }
                self.index = match self.direction {
                    Direction::Forward  => self.index + 1,
                    Direction::Backward => self.index - 1,
                };
            }
            TraversalPolicy::Loop => {
                self.index = (self.index + 1) % len;
                self.direction = Direction::Forward;
            }
        }
        trace!("cursor advanced to {} ({:?})", self.index, self.direction);
    }

    /// Step one position back along the bounce sweep.
    ///
    /// Mirrors [`next`][Self::next]: at the last point the sweep direction
    /// becomes `Forward`, at the first it becomes `Backward`, then the index
    /// moves against the direction.  `previous` therefore undoes `next` and
    /// never leaves `[0, len)`.
    ///
    /// Returns [`PathError::Unsupported`] under `Loop` (paths of fewer than
    /// two points are a no-op under either policy).
    pub fn previous(&mut self) -> PathResult<()> {
        let len = self.len();
        if len <= 1 {
            return Ok(());
        }

        match self.policy {
            TraversalPolicy::Bounce => {
                if self.index >= len - 1 {
                    self.direction = Direction::Forward;
                }
                if self.index == 0 {
                    self.direction = Direction::Backward;
                }
                self.index = match self.direction {
                    Direction::Forward  => self.index - 1,
                    Direction::Backward => self.index + 1,
                };
                trace!("cursor stepped back to {} ({:?})", self.index, self.direction);
                Ok(())
            }
            TraversalPolicy::Loop => Err(PathError::Unsupported {
                operation: "previous",
                policy:    self.policy,
            }),
        }
    }

    /// Jump straight to `index`, keeping the current direction.
    ///
    /// Out-of-range indices are reported, never clamped.  On an empty path
    /// every index is out of range.
    pub fn set_index(&mut self, index: usize) -> PathResult<()> {
        if index >= self.len() {
            return Err(PathError::OutOfRange { index, len: self.len() });
        }
        self.index = index;
        Ok(())
    }

    // ── Lazy view ─────────────────────────────────────────────────────────

    /// Lazily enumerate the targets this cursor would visit, starting with
    /// the current one.
    ///
    /// The sweep runs on a copy of the cursor state; `self` is not advanced.
    /// Call again at any time to restart from the cursor's present position.
    /// The iterator is infinite for non-empty paths.
    pub fn sweep(&self) -> Sweep {
        Sweep { cursor: self.clone(), primed: false }
    }
}

/// Infinite iterator over `(index, position)` pairs produced by repeatedly
/// advancing a copy of a [`PathCursor`].  See [`PathCursor::sweep`].
#[derive(Clone, Debug)]
pub struct Sweep {
    cursor: PathCursor,
    primed: bool,
}

impl Iterator for Sweep {
    type Item = (usize, Position);

    fn next(&mut self) -> Option<Self::Item> {
        if self.primed {
            self.cursor.next();
        } else {
            self.primed = true;
        }
        self.cursor.current().map(|p| (self.cursor.index(), p))
    }
}

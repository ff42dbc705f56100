//! `PathFollower` — arrival-driven movement along a waypoint path.

use log::{trace, warn};
use wp_core::within;
use wp_path::{PathCursor, Waypoints};

use crate::{FollowerConfig, MotionError, MotionResult, PositionSink};

/// Moves an entity toward its cursor's current waypoint every tick and
/// advances the cursor on arrival.
///
/// Typical users: moving platforms and flying enemies on patrol.
///
/// # Lifecycle
///
/// 1. Build with [`new`][Self::new] (or [`MoverBuilder`][crate::MoverBuilder]).
/// 2. [`activate`][Self::activate] once: the entity is snapped onto the first
///    waypoint so it does not visibly glide there from its spawn point.
/// 3. [`tick`][Self::tick] every simulation step.
///
/// A follower with no waypoints fails activation with
/// [`MotionError::Config`], logs it once, and then ignores ticks.
pub struct PathFollower<P: PositionSink> {
    cursor: PathCursor,
    config: FollowerConfig,
    sink:   P,
    inert:  bool,
}

impl<P: PositionSink> PathFollower<P> {
    /// Bind a follower to `waypoints` and `sink`.
    ///
    /// Fails if `config` has a negative or non-finite speed or tolerance.
    pub fn new(waypoints: impl Into<Waypoints>, config: FollowerConfig, sink: P) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            cursor: PathCursor::new(waypoints, config.policy),
            config,
            sink,
            inert: false,
        })
    }

    /// Snap the entity onto the current waypoint.
    pub fn activate(&mut self) -> MotionResult<()> {
        match self.cursor.current() {
            Some(start) => {
                self.sink.set_position(start);
                self.inert = false;
                Ok(())
            }
            None => {
                if !self.inert {
                    warn!("path follower has no waypoints; it will stay where it is");
                }
                self.inert = true;
                Err(MotionError::Config("path follower has no waypoints".into()))
            }
        }
    }

    /// Move toward the current waypoint; advance the cursor on arrival.
    pub fn tick(&mut self, dt: f32) {
        if self.inert {
            return;
        }
        let Some(target) = self.cursor.current() else {
            return;
        };

        let from = self.sink.position();
        let to = self.config.interpolation.step(from, target, self.config.speed, dt);
        self.sink.set_position(to);

        if within(to, target, self.config.arrival_tolerance) {
            self.cursor.next();
            trace!("arrived at {target}; next waypoint {}", self.cursor.index());
        }
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    #[inline]
    pub fn cursor(&self) -> &PathCursor {
        &self.cursor
    }

    /// Mutable cursor access for external re-seeking (jump, reset).
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut PathCursor {
        &mut self.cursor
    }

    #[inline]
    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }

    #[inline]
    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn into_sink(self) -> P {
        self.sink
    }
}

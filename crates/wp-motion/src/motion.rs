//! The `Motion` trait and a builder that wires movers to their sinks.

use std::cell::RefCell;
use std::rc::Rc;

use wp_path::Waypoints;

use crate::{
    FollowerConfig, MotionError, MotionResult, PathFollower, PositionSink, TimedPathWalker,
    WalkerConfig,
};

/// A per-tick mover, as driven by the simulation loop.
///
/// The loop calls [`activate`][Self::activate] once at start-up and
/// [`tick`][Self::tick] once per step with the fixed tick duration.
pub trait Motion {
    /// One-time start-up.  A configuration error leaves the mover inert.
    fn activate(&mut self) -> MotionResult<()>;

    fn tick(&mut self, dt: f32);

    fn is_inert(&self) -> bool;
}

impl<P: PositionSink> Motion for PathFollower<P> {
    fn activate(&mut self) -> MotionResult<()> {
        PathFollower::activate(self)
    }

    fn tick(&mut self, dt: f32) {
        PathFollower::tick(self, dt);
    }

    fn is_inert(&self) -> bool {
        PathFollower::is_inert(self)
    }
}

impl<P: PositionSink> Motion for TimedPathWalker<P> {
    fn activate(&mut self) -> MotionResult<()> {
        TimedPathWalker::activate(self)
    }

    fn tick(&mut self, dt: f32) {
        TimedPathWalker::tick(self, dt);
    }

    fn is_inert(&self) -> bool {
        TimedPathWalker::is_inert(self)
    }
}

/// A shared mover: the loop ticks it while game logic keeps a handle for
/// manual control (e.g. a switch that steps a walker).
///
/// The cell stays mutably borrowed for the whole tick, including any event
/// dispatch it causes.  Listeners reached from that dispatch must not borrow
/// the handle; a walker's listeners use its
/// [`WalkerRemote`][crate::WalkerRemote].
impl<M: Motion + ?Sized> Motion for Rc<RefCell<M>> {
    fn activate(&mut self) -> MotionResult<()> {
        self.borrow_mut().activate()
    }

    fn tick(&mut self, dt: f32) {
        self.borrow_mut().tick(dt);
    }

    fn is_inert(&self) -> bool {
        self.borrow().is_inert()
    }
}

/// Fluent builder for movers whose inputs arrive piecemeal (e.g. from a
/// scene file).
///
/// # Defaults
///
/// | Method          | Default               |
/// |-----------------|-----------------------|
/// | `.waypoints(w)` | `Waypoints::empty()`  |
/// | `.sink(s)`      | required              |
///
/// A missing sink fails `build_*` with [`MotionError::Config`].  Missing
/// waypoints do not: the mover is built and reports itself on activation.
pub struct MoverBuilder<P: PositionSink> {
    waypoints: Waypoints,
    sink:      Option<P>,
}

impl<P: PositionSink> MoverBuilder<P> {
    pub fn new() -> Self {
        Self { waypoints: Waypoints::empty(), sink: None }
    }

    pub fn waypoints(mut self, waypoints: impl Into<Waypoints>) -> Self {
        self.waypoints = waypoints.into();
        self
    }

    pub fn sink(mut self, sink: P) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build_follower(self, config: FollowerConfig) -> MotionResult<PathFollower<P>> {
        let sink = self.sink.ok_or_else(|| missing_sink("path follower"))?;
        PathFollower::new(self.waypoints, config, sink)
    }

    pub fn build_walker(self, config: WalkerConfig) -> MotionResult<TimedPathWalker<P>> {
        let sink = self.sink.ok_or_else(|| missing_sink("timed path walker"))?;
        TimedPathWalker::new(self.waypoints, config, sink)
    }
}

impl<P: PositionSink> Default for MoverBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_sink(what: &str) -> MotionError {
    MotionError::Config(format!("{what} has no position sink"))
}

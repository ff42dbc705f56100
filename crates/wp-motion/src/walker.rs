//! `TimedPathWalker` — timer-driven and manually stepped path movement.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, warn};
use wp_core::Timer;
use wp_event::EventBroadcaster;
use wp_path::{PathCursor, Waypoints};

use crate::{
    MotionError, MotionResult, PositionSink, StepCause, WalkerConfig, WaypointListener,
    WaypointStepped,
};

/// A manual command queued through a [`WalkerRemote`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkerCommand {
    StepForward,
    StepBackward,
    JumpTo(usize),
    Reset,
    SetEnabled(bool),
}

/// Cloneable control handle for a [`TimedPathWalker`].
///
/// Commands are queued and applied at the start of the walker's next tick.
/// This is the way for a [`WaypointListener`] to steer the walker that is
/// notifying it: the walker is mid-call during dispatch, so calling its
/// methods directly (e.g. through a shared `Rc<RefCell<_>>`) would alias it.
#[derive(Clone, Debug, Default)]
pub struct WalkerRemote {
    queue: Rc<RefCell<VecDeque<WalkerCommand>>>,
}

impl WalkerRemote {
    pub fn send(&self, command: WalkerCommand) {
        self.queue.borrow_mut().push_back(command);
    }

    /// Commands waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn take_all(&self) -> Vec<WalkerCommand> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

/// Walks a path on a timer rather than on arrival.
///
/// Used by patrolling blockers and remotely controlled platforms: the cursor
/// advances every `delay_secs` of accumulated tick time while enabled, and
/// can be stepped, jumped, or reset by external triggers at any moment.
/// Every step, automatic or manual, restarts the timer and dispatches a
/// [`WaypointStepped`] to the walker's listeners.
///
/// Between steps the entity moves toward the current waypoint exactly as a
/// [`PathFollower`][crate::PathFollower] does, but reaching it does not
/// advance anything.
///
/// Listeners must not call this walker's methods from inside
/// `on_waypoint_stepped`; they queue commands through
/// [`remote`][Self::remote] instead.
pub struct TimedPathWalker<P: PositionSink> {
    cursor:  PathCursor,
    config:  WalkerConfig,
    sink:    P,
    timer:   Timer,
    enabled: bool,
    inert:   bool,
    events:  Rc<EventBroadcaster<dyn WaypointListener>>,
    remote:  WalkerRemote,
}

impl<P: PositionSink> TimedPathWalker<P> {
    pub fn new(waypoints: impl Into<Waypoints>, config: WalkerConfig, sink: P) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            cursor:  PathCursor::new(waypoints, config.policy),
            timer:   Timer::new(config.delay_secs),
            enabled: config.enabled,
            config,
            sink,
            inert:   false,
            events:  Rc::new(EventBroadcaster::new()),
            remote:  WalkerRemote::default(),
        })
    }

    /// Snap the entity onto the current waypoint.  See
    /// [`PathFollower::activate`][crate::PathFollower::activate].
    pub fn activate(&mut self) -> MotionResult<()> {
        match self.cursor.current() {
            Some(start) => {
                self.sink.set_position(start);
                self.inert = false;
                Ok(())
            }
            None => {
                if !self.inert {
                    warn!("timed path walker has no waypoints; it will stay where it is");
                }
                self.inert = true;
                Err(MotionError::Config("timed path walker has no waypoints".into()))
            }
        }
    }

    /// Apply queued remote commands, advance the timer (when enabled), step
    /// if it elapsed, then move toward the current waypoint.
    pub fn tick(&mut self, dt: f32) {
        if self.inert {
            self.remote.take_all();
            return;
        }
        self.apply_queued();
        if self.enabled && self.timer.advance(dt) {
            self.cursor.next();
            self.stepped(StepCause::Auto);
        }
        if let Some(target) = self.cursor.current() {
            let from = self.sink.position();
            let to = self.config.interpolation.step(from, target, self.config.speed, dt);
            self.sink.set_position(to);
        }
    }

    // ── Manual control ────────────────────────────────────────────────────

    pub fn step_forward(&mut self) {
        self.cursor.next();
        self.stepped(StepCause::Forward);
    }

    /// Step back along the sweep.  Fails (changing nothing) under `Loop`.
    pub fn step_backward(&mut self) -> MotionResult<()> {
        self.cursor.previous()?;
        self.stepped(StepCause::Backward);
        Ok(())
    }

    /// Jump to waypoint `index`.  Fails (changing nothing) when out of range.
    pub fn jump_to(&mut self, index: usize) -> MotionResult<()> {
        self.cursor.set_index(index)?;
        self.stepped(StepCause::Jump);
        Ok(())
    }

    /// Back to the first waypoint, moving forward.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.stepped(StepCause::Reset);
    }

    /// Pause or resume automatic stepping.  Manual steps work either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    #[inline]
    pub fn cursor(&self) -> &PathCursor {
        &self.cursor
    }

    #[inline]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    #[inline]
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    #[inline]
    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// A handle for queuing manual commands; see [`WalkerRemote`].
    pub fn remote(&self) -> WalkerRemote {
        self.remote.clone()
    }

    /// Where step notifications go.
    #[inline]
    pub fn events(&self) -> &Rc<EventBroadcaster<dyn WaypointListener>> {
        &self.events
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Commands sent while these run wait for the following tick.
    fn apply_queued(&mut self) {
        for command in self.remote.take_all() {
            let result = match command {
                WalkerCommand::StepForward => {
                    self.step_forward();
                    Ok(())
                }
                WalkerCommand::StepBackward => self.step_backward(),
                WalkerCommand::JumpTo(index) => self.jump_to(index),
                WalkerCommand::Reset => {
                    self.reset();
                    Ok(())
                }
                WalkerCommand::SetEnabled(enabled) => {
                    self.set_enabled(enabled);
                    Ok(())
                }
            };
            if let Err(e) = result {
                warn!("queued {command:?} rejected: {e}");
            }
        }
    }

    /// Restart the timer and announce the new target.  Nothing is announced
    /// for an empty path.
    fn stepped(&mut self, cause: StepCause) {
        self.timer.reset();
        let Some(position) = self.cursor.current() else {
            return;
        };
        let step = WaypointStepped { index: self.cursor.index(), position, cause };
        self.events.dispatch(&step);
        debug!("walker stepped to {} ({cause:?})", step.index);
    }
}

//! Events raised by timed walkers.

use wp_core::Position;
use wp_event::Event;

/// What made a walker step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StepCause {
    /// The auto-advance timer elapsed.
    Auto,
    Forward,
    Backward,
    Jump,
    Reset,
}

/// A walker moved its cursor (or was told to).  Carries the new target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaypointStepped {
    pub index:    usize,
    pub position: Position,
    pub cause:    StepCause,
}

/// Receives walker steps ("announce arrival" style side effects).
pub trait WaypointListener {
    fn on_waypoint_stepped(&self, step: &WaypointStepped);
}

impl<L: WaypointListener + ?Sized> Event<L> for WaypointStepped {
    fn deliver(&self, listener: &L) {
        listener.on_waypoint_stepped(self);
    }
}

//! Event payloads and the listener capabilities that receive them.

use wp_core::{EntityId, Position};
use wp_event::Event;

/// A behavior transition.  `previous != current` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BehaviorChanged<S> {
    pub previous: S,
    pub current:  S,
}

/// An action (shot, push, launch) performed by `actor`.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionFired {
    pub actor:   EntityId,
    /// The entity aimed at, if the action has one.
    pub target:  Option<EntityId>,
    /// Impulse applied by the action, in world units.
    pub impulse: Position,
}

/// Receives behavior transitions.
pub trait BehaviorListener<S> {
    fn on_behavior_changed(&self, change: &BehaviorChanged<S>);
}

/// Receives fired actions.
pub trait ActionListener {
    fn on_action_fired(&self, action: &ActionFired);
}

/// Both capabilities, for features whose state machine and action triggers
/// share one broadcaster (e.g. an enemy that also shoots).
///
/// Implemented automatically for anything that implements both.
pub trait CombatListener<S>: BehaviorListener<S> + ActionListener {}

impl<S, T: BehaviorListener<S> + ActionListener + ?Sized> CombatListener<S> for T {}

impl<S, L: BehaviorListener<S> + ?Sized> Event<L> for BehaviorChanged<S> {
    fn deliver(&self, listener: &L) {
        listener.on_behavior_changed(self);
    }
}

impl<L: ActionListener + ?Sized> Event<L> for ActionFired {
    fn deliver(&self, listener: &L) {
        listener.on_action_fired(self);
    }
}

//! The behavior state machine.

use std::rc::Rc;

use log::debug;
use wp_event::{Event, EventBroadcaster};

use crate::{BehaviorChanged, BehaviorListener, BehaviorState};

/// Tracks one entity's discrete behavior state and broadcasts every
/// transition.
///
/// `L` is the listener type of the broadcaster transitions go to.  It
/// defaults to `dyn BehaviorListener<S>`; features that also raise other
/// events on the same broadcaster use a wider capability such as
/// `dyn CombatListener<S>`.
///
/// # Example
///
/// ```rust,ignore
/// let mut ai = BehaviorStateMachine::new(CreatureState::Idle);
/// ai.events().add_listener(&effect_toggle);
/// ai.set_state(CreatureState::Chase);   // one BehaviorChanged { Idle, Chase }
/// ai.set_state(CreatureState::Chase);   // no-op, nothing dispatched
/// ```
pub struct BehaviorStateMachine<S: BehaviorState, L: ?Sized = dyn BehaviorListener<S>> {
    current:  S,
    previous: Option<S>,
    events:   Rc<EventBroadcaster<L>>,
}

impl<S: BehaviorState, L: ?Sized> BehaviorStateMachine<S, L>
where
    BehaviorChanged<S>: Event<L>,
{
    /// Start in `initial` with a fresh broadcaster.
    pub fn new(initial: S) -> Self {
        Self::with_broadcaster(initial, Rc::new(EventBroadcaster::new()))
    }

    /// Start in `initial`, raising transitions on a broadcaster shared with
    /// other event sources of the same feature.
    pub fn with_broadcaster(initial: S, events: Rc<EventBroadcaster<L>>) -> Self {
        Self { current: initial, previous: None, events }
    }

    #[inline]
    pub fn current(&self) -> S {
        self.current
    }

    /// The state before the most recent transition (`None` until the first).
    #[inline]
    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    #[inline]
    pub fn is(&self, state: S) -> bool {
        self.current == state
    }

    /// The broadcaster transitions are dispatched on.  Clone the `Rc` to let
    /// listeners subscribe or unsubscribe from inside their callbacks.
    #[inline]
    pub fn events(&self) -> &Rc<EventBroadcaster<L>> {
        &self.events
    }

    /// Move to `state`.
    ///
    /// A request for the current state does nothing and dispatches nothing.
    /// Otherwise exactly one [`BehaviorChanged`] is dispatched, synchronously,
    /// before this returns.  Returns whether a transition happened.
    pub fn set_state(&mut self, state: S) -> bool {
        if state == self.current {
            return false;
        }
        let change = BehaviorChanged { previous: self.current, current: state };
        self.previous = Some(self.current);
        self.current = state;

        let reached = self.events.dispatch(&change);
        debug!("behavior {:?} -> {:?} ({reached} listeners)", change.previous, change.current);
        true
    }
}

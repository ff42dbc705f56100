//! `ActionTrigger` — a cooldown-driven source of `ActionFired` events.
//!
//! Models cannons and similar actors: while armed, the trigger fires every
//! `cooldown_secs` of accumulated tick time.  External logic may also fire
//! it on demand, which restarts the cooldown.

use std::rc::Rc;

use log::debug;
use wp_core::{EntityId, Position, Timer};
use wp_event::{Event, EventBroadcaster};

use crate::{ActionFired, ActionListener, BehaviorError, BehaviorResult};

/// Construction parameters for an [`ActionTrigger`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionConfig {
    pub actor:         EntityId,
    pub target:        Option<EntityId>,
    pub impulse:       Position,
    /// Seconds between automatic shots.  Must be finite and non-negative.
    pub cooldown_secs: f32,
    /// Whether the trigger starts firing immediately.
    pub armed:         bool,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            actor:         EntityId::INVALID,
            target:        None,
            impulse:       Position::ZERO,
            cooldown_secs: 1.0,
            armed:         true,
        }
    }
}

/// Fires [`ActionFired`] on its broadcaster on a fixed cooldown.
pub struct ActionTrigger<L: ?Sized = dyn ActionListener> {
    actor:    EntityId,
    target:   Option<EntityId>,
    impulse:  Position,
    cooldown: Timer,
    armed:    bool,
    fired:    u64,
    events:   Rc<EventBroadcaster<L>>,
}

impl<L: ?Sized> ActionTrigger<L>
where
    ActionFired: Event<L>,
{
    pub fn new(config: ActionConfig) -> BehaviorResult<Self> {
        Self::with_broadcaster(config, Rc::new(EventBroadcaster::new()))
    }

    /// Like [`new`][Self::new] but fires on a shared broadcaster.
    pub fn with_broadcaster(
        config: ActionConfig,
        events: Rc<EventBroadcaster<L>>,
    ) -> BehaviorResult<Self> {
        if !config.cooldown_secs.is_finite() || config.cooldown_secs < 0.0 {
            return Err(BehaviorError::Config(format!(
                "cooldown_secs must be finite and non-negative, got {}",
                config.cooldown_secs
            )));
        }
        Ok(Self {
            actor:    config.actor,
            target:   config.target,
            impulse:  config.impulse,
            cooldown: Timer::new(config.cooldown_secs),
            armed:    config.armed,
            fired:    0,
            events,
        })
    }

    #[inline]
    pub fn events(&self) -> &Rc<EventBroadcaster<L>> {
        &self.events
    }

    #[inline]
    pub fn actor(&self) -> EntityId {
        self.actor
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Total actions fired so far.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start automatic firing.  The cooldown restarts from zero.
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.cooldown.reset();
        }
    }

    /// Stop automatic firing; `fire_now` still works.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn set_target(&mut self, target: Option<EntityId>) {
        self.target = target;
    }

    /// Advance the cooldown by `dt`; fire if it elapsed.  Returns whether an
    /// action was fired.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed || !self.cooldown.advance(dt) {
            return false;
        }
        self.fire_now();
        true
    }

    /// Fire immediately and restart the cooldown.
    pub fn fire_now(&mut self) {
        self.cooldown.reset();
        self.fired += 1;
        let action = ActionFired {
            actor:   self.actor,
            target:  self.target,
            impulse: self.impulse,
        };
        let reached = self.events.dispatch(&action);
        debug!("{} fired at {:?} ({reached} listeners)", self.actor, self.target);
    }
}

//! `EffectToggle` — an effect volume keyed to behavior state membership.
//!
//! Flying enemies switch a particle/damage volume on while attacking and off
//! otherwise.  Rather than a flying subtype of the AI, the volume is a
//! listener on the ordinary state machine.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::{BehaviorChanged, BehaviorListener, BehaviorState};

/// Something that can be switched on and off (particle emitter, hit volume).
pub trait EffectSink {
    fn set_effect_active(&mut self, active: bool);
}

impl EffectSink for Rc<Cell<bool>> {
    fn set_effect_active(&mut self, active: bool) {
        self.set(active);
    }
}

/// Which states the effect is active in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectParams<S> {
    pub active_in: Vec<S>,
}

impl<S: BehaviorState> EffectParams<S> {
    pub fn new(active_in: impl IntoIterator<Item = S>) -> Self {
        Self { active_in: active_in.into_iter().collect() }
    }

    #[inline]
    pub fn is_active_in(&self, state: S) -> bool {
        self.active_in.contains(&state)
    }
}

/// Listener that drives an [`EffectSink`] from [`BehaviorChanged`] events.
///
/// The sink is only touched when membership actually flips; moving between
/// two states that are both in (or both out of) the active set leaves it
/// alone.
pub struct EffectToggle<S, E> {
    params: EffectParams<S>,
    sink:   RefCell<E>,
    active: Cell<bool>,
}

impl<S: BehaviorState, E: EffectSink> EffectToggle<S, E> {
    /// Build the toggle and bring `sink` in line with `initial` right away.
    pub fn new(params: EffectParams<S>, mut sink: E, initial: S) -> Self {
        let active = params.is_active_in(initial);
        sink.set_effect_active(active);
        Self {
            params,
            sink:   RefCell::new(sink),
            active: Cell::new(active),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn params(&self) -> &EffectParams<S> {
        &self.params
    }
}

impl<S: BehaviorState, E: EffectSink> BehaviorListener<S> for EffectToggle<S, E> {
    fn on_behavior_changed(&self, change: &BehaviorChanged<S>) {
        let active = self.params.is_active_in(change.current);
        if active == self.active.get() {
            return;
        }
        self.active.set(active);
        self.sink.borrow_mut().set_effect_active(active);
        debug!("effect {} on entering {:?}", if active { "enabled" } else { "disabled" }, change.current);
    }
}

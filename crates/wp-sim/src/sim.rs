//! The `Sim` struct and its tick loop.

use log::trace;
use wp_behavior::{ActionFired, ActionTrigger};
use wp_core::{SimClock, SimConfig, Tick};
use wp_event::Event;
use wp_motion::Motion;

use crate::SimObserver;

/// Anything the loop ticks for its side effects only.  Erases the listener
/// type of an [`ActionTrigger`].
pub(crate) trait Cooldown {
    fn tick(&mut self, dt: f32) -> bool;
}

impl<L> Cooldown for ActionTrigger<L>
where
    L: ?Sized,
    ActionFired: Event<L>,
{
    fn tick(&mut self, dt: f32) -> bool {
        ActionTrigger::tick(self, dt)
    }
}

/// The simulation runner.
///
/// Holds every mover and trigger of a scene and advances them in lock-step
/// with a fixed `dt`.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Tick count and tick duration.
    pub config: SimConfig,

    /// Tracks the current tick.
    pub clock: SimClock,

    /// Movers, in tick order.  Already activated by the builder.
    pub movers: Vec<Box<dyn Motion>>,

    pub(crate) triggers: Vec<Box<dyn Cooldown>>,
}

impl Sim {
    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Movers that are not inert.
    pub fn active_movers(&self) -> usize {
        self.movers.iter().filter(|m| !m.is_inert()).count()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        let dt = self.config.tick_duration_secs;

        observer.on_tick_start(now);
        for mover in &mut self.movers {
            mover.tick(dt);
        }
        let mut fired = 0;
        for trigger in &mut self.triggers {
            if trigger.tick(dt) {
                fired += 1;
            }
        }
        trace!("{now}: {fired} triggers fired");
        observer.on_tick_end(now, self.active_movers());

        self.clock.advance();
    }
}

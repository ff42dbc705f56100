//! Fluent builder for constructing a [`Sim`].

use log::warn;
use wp_behavior::{ActionFired, ActionTrigger};
use wp_core::SimConfig;
use wp_event::Event;
use wp_motion::Motion;

use crate::sim::Cooldown;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Inputs
///
/// | Method          | Default        |
/// |-----------------|----------------|
/// | `new(config)`   | required       |
/// | `.mover(m)`     | no movers      |
/// | `.trigger(t)`   | no triggers    |
///
/// Movers and triggers are ticked in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .mover(Box::new(follower))
///     .mover(Box::new(walker))
///     .trigger(cannon)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    movers:   Vec<Box<dyn Motion>>,
    triggers: Vec<Box<dyn Cooldown>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, movers: Vec::new(), triggers: Vec::new() }
    }

    pub fn mover(mut self, mover: Box<dyn Motion>) -> Self {
        self.movers.push(mover);
        self
    }

    /// Add an action trigger, whatever broadcaster it fires on.
    pub fn trigger<L>(mut self, trigger: ActionTrigger<L>) -> Self
    where
        L: ?Sized + 'static,
        ActionFired: Event<L>,
    {
        self.triggers.push(Box::new(trigger));
        self
    }

    /// Validate the configuration, activate every mover, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Only the configuration is fatal.  A mover that fails activation is
    /// logged and kept; it stays inert for the whole run.
    pub fn build(mut self) -> SimResult<Sim> {
        self.config.validate()?;

        for (i, mover) in self.movers.iter_mut().enumerate() {
            if let Err(e) = mover.activate() {
                warn!("mover {i} failed to activate: {e}");
            }
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            movers:   self.movers,
            triggers: self.triggers,
        })
    }
}

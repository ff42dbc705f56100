//! Simulation observer trait for progress reporting and scripted input.

use wp_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_tick_start` is the natural place
/// for an animation driver to call `set_state` on its machines.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, active: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {active} movers active");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any mover moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of movers that are not inert.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

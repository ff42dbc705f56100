//! `wp-sim` — the fixed-step tick loop for the waypost behavior kernel.
//!
//! # Tick loop
//!
//! ```text
//! build():  validate SimConfig, activate every mover once
//!           (a mover that fails activation is logged and stays inert)
//!
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start(tick)
//!   ② Movers   — Motion::tick(dt) in insertion order
//!   ③ Triggers — ActionTrigger::tick(dt) in insertion order
//!   ④ on_tick_end(tick, active_movers)
//! on_sim_end(final_tick)
//! ```
//!
//! `dt` is always `config.tick_duration_secs`; the loop never reads a wall
//! clock.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wp_core::SimConfig;
//! use wp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .mover(Box::new(platform))
//!     .trigger(cannon)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;

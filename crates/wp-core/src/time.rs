//! Simulation time model.
//!
//! # Design
//!
//! Time advances in fixed-cadence ticks.  `Tick` counts them; `SimClock`
//! maps the count to elapsed seconds:
//!
//!   elapsed = tick * tick_duration_secs
//!
//! Anything of the form "wait N seconds, then do X" is a [`Timer`]: an
//! accumulator advanced once per tick with the tick's elapsed time and
//! inspected right after.  Nothing in the kernel sleeps or blocks.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the fixed step each tick represents.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of game time one tick represents (e.g. `1/60`).
    pub tick_duration_secs: f32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed game seconds since tick 0.
    ///
    /// Computed in `f64` from the integer tick so long runs do not drift.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_secs as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level tick-loop configuration.
///
/// Typically loaded from a JSON scene file by the application crate and
/// passed to the simulation runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Must be finite and positive.  Default: 1/60.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 1.0 / 60.0,
            total_ticks:        600,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject tick durations the loop cannot step with.
    pub fn validate(&self) -> crate::WpResult<()> {
        if !self.tick_duration_secs.is_finite() || self.tick_duration_secs <= 0.0 {
            return Err(crate::WpError::Config(format!(
                "tick_duration_secs must be finite and positive, got {}",
                self.tick_duration_secs
            )));
        }
        Ok(())
    }
}

// ── Timer ─────────────────────────────────────────────────────────────────────

/// Elapsed-time accumulator with a fixed delay.
///
/// `advance(dt)` adds the tick's elapsed time and reports whether the delay
/// has been reached.  The owner decides what to do and calls [`reset`]; the
/// accumulator restarts from zero rather than carrying the remainder.
///
/// Time is summed in `f64` and compared with a relative tolerance, so a
/// delay that is a whole number of ticks fires on exactly that tick even
/// when `dt` (e.g. `1/60`) is not representable in `f32`.
///
/// [`reset`]: Timer::reset
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    delay:       f32,
    accumulated: f64,
}

/// Relative slack absorbing `f32` rounding of per-tick `dt`.
const DUE_TOLERANCE: f64 = 1e-6;

impl Timer {
    pub fn new(delay: f32) -> Self {
        Self { delay, accumulated: 0.0 }
    }

    /// Add `dt` seconds; `true` once the accumulated time reaches the delay.
    #[inline]
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt as f64;
        self.is_due()
    }

    #[inline]
    pub fn is_due(&self) -> bool {
        let delay = self.delay as f64;
        self.accumulated + DUE_TOLERANCE * delay.max(1.0) >= delay
    }

    #[inline]
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    #[inline]
    pub fn delay(&self) -> f32 {
        self.delay
    }

    #[inline]
    pub fn accumulated(&self) -> f32 {
        self.accumulated as f32
    }

    /// Seconds left until the timer is due (zero once due).
    pub fn remaining(&self) -> f32 {
        if self.is_due() {
            return 0.0;
        }
        (self.delay as f64 - self.accumulated) as f32
    }
}

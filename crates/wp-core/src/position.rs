//! 3-D position type and the motion primitives shared by every mover.
//!
//! `Position` is a plain `glam::Vec3` in world units.  The helpers here are
//! the only place interpolation arithmetic lives so followers and walkers
//! move identically.

/// A point in world space.
pub type Position = glam::Vec3;

/// Move `from` toward `to` by at most `max_delta` world units.
///
/// The step is clamped to the remaining distance, so an overshooting step
/// lands exactly on `to`.  A non-positive `max_delta` leaves `from` unchanged.
pub fn move_towards(from: Position, to: Position, max_delta: f32) -> Position {
    if max_delta <= 0.0 {
        return from;
    }
    let offset = to - from;
    let dist_sq = offset.length_squared();
    if dist_sq <= max_delta * max_delta {
        return to;
    }
    from + offset * (max_delta / dist_sq.sqrt())
}

/// Proportional (exponential) easing of `from` toward `to`.
///
/// Covers the fraction `1 - e^(-rate * dt)` of the remaining distance, which
/// is frame-rate independent: two ticks of `dt/2` land where one tick of `dt`
/// does.  Never overshoots.
pub fn ease_towards(from: Position, to: Position, rate: f32, dt: f32) -> Position {
    if rate <= 0.0 || dt <= 0.0 {
        return from;
    }
    let t = 1.0 - (-rate * dt).exp();
    from.lerp(to, t.clamp(0.0, 1.0))
}

/// `true` when `a` and `b` are strictly closer than `tolerance`.
///
/// Compares squared distances; no square root is taken.
#[inline]
pub fn within(a: Position, b: Position, tolerance: f32) -> bool {
    a.distance_squared(b) < tolerance * tolerance
}

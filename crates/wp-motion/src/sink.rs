//! Entity position sinks.

use std::cell::Cell;
use std::rc::Rc;

use wp_core::Position;

/// Read/write access to one entity's position.
///
/// The sink is handed to a mover once, at construction; movers never look
/// the entity up again.  Use `Rc<Cell<Position>>` when the renderer or
/// physics layer needs to share the value with the mover.
pub trait PositionSink {
    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
}

impl PositionSink for Position {
    #[inline]
    fn position(&self) -> Position {
        *self
    }

    #[inline]
    fn set_position(&mut self, position: Position) {
        *self = position;
    }
}

impl PositionSink for Rc<Cell<Position>> {
    #[inline]
    fn position(&self) -> Position {
        self.get()
    }

    #[inline]
    fn set_position(&mut self, position: Position) {
        self.set(position);
    }
}

impl<T: PositionSink + ?Sized> PositionSink for &mut T {
    #[inline]
    fn position(&self) -> Position {
        (**self).position()
    }

    #[inline]
    fn set_position(&mut self, position: Position) {
        (**self).set_position(position);
    }
}

//! The `Event` trait — how an event value reaches a listener.

/// An event deliverable to listeners of type `L`.
///
/// Implementations call the one capability method on `L` that handles this
/// payload.  The payload is passed by shared reference, so listeners see an
/// immutable snapshot and cannot reach the state that produced it.
///
/// # Example
///
/// ```rust
/// use wp_event::{Event, EventBroadcaster};
///
/// pub trait DoorListener {
///     fn on_opened(&self, door: &DoorOpened);
/// }
///
/// #[derive(Clone, Debug)]
/// pub struct DoorOpened { pub door: u32 }
///
/// impl<L: DoorListener + ?Sized> Event<L> for DoorOpened {
///     fn deliver(&self, listener: &L) {
///         listener.on_opened(self);
///     }
/// }
///
/// let doors: EventBroadcaster<dyn DoorListener> = EventBroadcaster::new();
/// assert_eq!(doors.dispatch(&DoorOpened { door: 3 }), 0);
/// ```
pub trait Event<L: ?Sized> {
    /// Invoke the matching capability method on `listener`.
    fn deliver(&self, listener: &L);
}

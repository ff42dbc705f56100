//! `EventBroadcaster<L>` — the listener registry and dispatch loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;

use crate::Event;

/// Registry of non-owning listener handles with synchronous, ordered
/// dispatch.
///
/// `L` is the listener capability type, normally a trait object such as
/// `dyn BehaviorListener<S>`.
///
/// # Identity
///
/// Listeners are compared by allocation address: registering the same
/// `Rc` twice is refused, while two distinct allocations of equal value are
/// two listeners.
///
/// # Reentrancy
///
/// All methods take `&self`.  [`dispatch`][Self::dispatch] iterates over a
/// snapshot of the registry, so listeners may call
/// [`add_listener`][Self::add_listener] or
/// [`remove_listener`][Self::remove_listener] (or dispatch again) from inside
/// their callback.  A listener that removes itself still receives the event
/// being dispatched, but not the next one.
pub struct EventBroadcaster<L: ?Sized> {
    listeners: RefCell<Vec<Weak<L>>>,
}

impl<L: ?Sized> EventBroadcaster<L> {
    pub fn new() -> Self {
        Self { listeners: RefCell::new(Vec::new()) }
    }

    /// Register `listener` at the end of the delivery order.
    ///
    /// Returns `false` and changes nothing if it is already registered.
    pub fn add_listener(&self, listener: &Rc<L>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.iter().any(|w| same_listener(w, listener)) {
            return false;
        }
        listeners.push(Rc::downgrade(listener));
        true
    }

    /// Unregister `listener`.  Returns `false` if it was not registered.
    ///
    /// Delivery order of the remaining listeners is unchanged.
    pub fn remove_listener(&self, listener: &Rc<L>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|w| same_listener(w, listener)) {
            Some(i) => {
                listeners.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, listener: &Rc<L>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|w| same_listener(w, listener))
    }

    /// Number of registered listeners that are still alive.
    pub fn len(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unregister every listener.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Deliver `event` to every listener registered at the moment of the
    /// call, in registration order, before returning.
    ///
    /// Returns how many listeners received it.  Listeners whose owners have
    /// dropped them are skipped and pruned from the registry afterwards.
    pub fn dispatch<E>(&self, event: &E) -> usize
    where
        E: Event<L> + ?Sized,
    {
        // Snapshot first: the borrow must be released before any callback
        // runs, since callbacks may mutate the registry.
        let snapshot: Vec<Weak<L>> = self.listeners.borrow().clone();

        let mut delivered = 0;
        let mut dead = 0;
        for weak in &snapshot {
            match weak.upgrade() {
                Some(listener) => {
                    event.deliver(&listener);
                    delivered += 1;
                }
                None => dead += 1,
            }
        }

        if dead > 0 {
            self.listeners.borrow_mut().retain(|w| w.strong_count() > 0);
        }
        trace!("dispatched to {delivered} listeners ({dead} dropped)");
        delivered
    }
}

impl<L: ?Sized> Default for EventBroadcaster<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for EventBroadcaster<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBroadcaster")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Address comparison that ignores trait-object metadata.
#[inline]
fn same_listener<L: ?Sized>(weak: &Weak<L>, listener: &Rc<L>) -> bool {
    std::ptr::addr_eq(weak.as_ptr(), Rc::as_ptr(listener))
}

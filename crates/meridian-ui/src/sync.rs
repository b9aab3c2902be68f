//! Shared repaint registry for widgets that redraw on the global tick.
//!
//! Every [`Clock`](crate::widgets::clock::Clock) registers here when it is
//! built. When the application's one-second timer fires it calls
//! [`request_repaint_all`], which marks each live registrant pending; the
//! widget clears its flag when it paints.
//!
//! The registry is thread-local to the UI thread and created on first use.
//! Handles hold an `Rc`, so they cannot leave that thread.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct Slot {
    pending: Cell<bool>,
}

thread_local! {
    static REGISTRY: RefCell<Vec<Weak<Slot>>> = const { RefCell::new(Vec::new()) };
}

/// A widget's membership in the registry. Dropping it unregisters.
#[derive(Debug)]
pub struct RepaintHandle {
    slot: Rc<Slot>,
}

impl RepaintHandle {
    /// Clears the pending flag; returns whether a tick arrived since the
    /// previous paint.
    #[inline]
    pub fn mark_painted(&self) -> bool {
        self.slot.pending.replace(false)
    }
}

/// Adds a new registrant and returns its handle.
pub fn register() -> RepaintHandle {
    let slot = Rc::new(Slot::default());
    REGISTRY.with_borrow_mut(|list| list.push(Rc::downgrade(&slot)));
    RepaintHandle { slot }
}

/// Marks every live registrant pending and forgets dropped ones.
///
/// Returns the number of registrants notified.
pub fn request_repaint_all() -> usize {
    REGISTRY.with_borrow_mut(|list| {
        list.retain(|weak| match weak.upgrade() {
            Some(slot) => {
                slot.pending.set(true);
                true
            }
            None => false,
        });
        list.len()
    })
}

/// Number of live registrants.
pub fn registered() -> usize {
    REGISTRY.with_borrow(|list| list.iter().filter(|w| w.strong_count() > 0).count())
}

/// Number of live registrants waiting for a repaint.
pub fn pending() -> usize {
    REGISTRY.with_borrow(|list| {
        list.iter()
            .filter_map(Weak::upgrade)
            .filter(|slot| slot.pending.get())
            .count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test runs on its own thread, so each sees a fresh registry.

    #[test]
    fn new_handles_start_clean() {
        let h = register();
        assert_eq!(registered(), 1);
        assert_eq!(pending(), 0);
        assert!(!h.mark_painted());
    }

    #[test]
    fn fire_marks_every_live_handle() {
        let a = register();
        let b = register();
        let c = register();

        assert_eq!(request_repaint_all(), 3);
        assert_eq!(pending(), 3);
        assert!(a.mark_painted() && b.mark_painted() && c.mark_painted());
    }

    #[test]
    fn painting_clears_only_that_handle() {
        let a = register();
        let b = register();
        request_repaint_all();

        assert!(a.mark_painted());
        assert_eq!(pending(), 1);
        assert!(!a.mark_painted());
        assert!(b.mark_painted());
    }

    #[test]
    fn dropped_handles_are_pruned_on_fire() {
        let keep = register();
        let gone = register();
        drop(gone);

        assert_eq!(registered(), 1);
        assert_eq!(request_repaint_all(), 1);
        assert!(keep.mark_painted());
    }

    #[test]
    fn repeated_fires_do_not_stack() {
        let h = register();
        request_repaint_all();
        request_repaint_all();
        assert!(h.mark_painted());
        assert!(!h.mark_painted());
    }

    #[test]
    fn empty_registry_notifies_nobody() {
        assert_eq!(request_repaint_all(), 0);
        assert_eq!(pending(), 0);
    }
}

//! Single-slot holder for handles whose drop releases a resource.
//!
//! Timers that cancel on drop and event subscriptions that unregister on drop
//! both fit here: replacing the content cancels the old task, and clearing an
//! empty slot does nothing.

#[derive(Debug)]
pub struct Slot<T> {
    handle: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.handle.is_some()
    }

    /// Stores `handle`, dropping whatever was there first.
    /// Returns true when an outstanding handle was released.
    pub fn replace(&mut self, handle: T) -> bool {
        let released = self.clear();
        self.handle = Some(handle);
        released
    }

    /// Stores the handle produced by `acquire` only if the slot is empty.
    /// `acquire` may fail by returning `None`, which leaves the slot empty.
    /// Returns true when a new handle was stored.
    pub fn fill_with(&mut self, acquire: impl FnOnce() -> Option<T>) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = acquire();
        self.handle.is_some()
    }

    /// Drops the handle, if any. Returns true when one was released.
    pub fn clear(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe(Rc<Cell<u32>>);

    impl Drop for Probe {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn replace_releases_previous_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::new();
        assert!(!slot.replace(Probe(drops.clone())));
        assert!(slot.replace(Probe(drops.clone())));
        assert_eq!(drops.get(), 1);
        assert!(slot.is_occupied());
    }

    #[test]
    fn fill_with_refuses_second_handle() {
        let drops = Rc::new(Cell::new(0));
        let acquired = Cell::new(0);
        let mut slot = Slot::new();
        let acquire = || {
            acquired.set(acquired.get() + 1);
            Some(Probe(drops.clone()))
        };
        assert!(slot.fill_with(acquire));
        assert!(!slot.fill_with(|| {
            acquired.set(acquired.get() + 1);
            Some(Probe(drops.clone()))
        }));
        assert_eq!(acquired.get(), 1);
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn failed_acquire_leaves_slot_empty() {
        let mut slot: Slot<Probe> = Slot::new();
        assert!(!slot.fill_with(|| None));
        assert!(!slot.is_occupied());
    }

    #[test]
    fn clear_is_idempotent() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::new();
        slot.replace(Probe(drops.clone()));
        assert!(slot.clear());
        assert!(!slot.clear());
        assert_eq!(drops.get(), 1);
    }
}

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Slot<T> = Rc<dyn Fn(&T)>;

/// A typed, single-threaded subject.
///
/// Delivery is synchronous and in subscription order. Subscribers may
/// subscribe, unsubscribe or emit again while a delivery is in progress;
/// those changes take effect from the next emission.
pub struct Signal<T> {
    slots: RefCell<Vec<(SubscriptionId, Slot<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let slot: Slot<T> = Rc::new(f);
        self.slots.borrow_mut().push((id, slot));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|(slot_id, _)| *slot_id != id);
        slots.len() != before
    }

    pub fn emit(&self, value: &T) {
        // Snapshot so subscribers can touch the slot list mid-delivery.
        let slots: Vec<Slot<T>> = self
            .slots
            .borrow()
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for slot in slots {
            slot(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

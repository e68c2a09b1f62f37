//! Page-scoped event subscriptions. A mounted page holds one guard per
//! event kind; dropping the guard detaches the listener.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    PointerDown,
    KeyDown,
}

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u64,
    live: HashMap<u64, EventKind>,
}

/// The document-level listener table. Cloning shares the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    table: Rc<RefCell<ListenerTable>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kind: EventKind) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.live.insert(id, kind);
        debug!(?kind, id, "listener attached");
        Subscription {
            id,
            kind,
            table: Rc::downgrade(&self.table),
        }
    }

    pub fn live_count(&self) -> usize {
        self.table.borrow().live.len()
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.table.borrow().live.values().any(|live| *live == kind)
    }
}

/// Attached listener; released on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: EventKind,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn is_attached(&self) -> bool {
        self.table
            .upgrade()
            .is_some_and(|table| table.borrow().live.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().live.remove(&self.id);
            debug!(kind = ?self.kind, id = self.id, "listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_a_subscription_detaches_it() {
        let registry = ListenerRegistry::new();
        let scroll = registry.subscribe(EventKind::Scroll);
        let keys = registry.subscribe(EventKind::KeyDown);
        assert_eq!(registry.live_count(), 2);
        assert!(scroll.is_attached());

        drop(scroll);
        assert_eq!(registry.live_count(), 1);
        assert!(!registry.is_listening(EventKind::Scroll));
        assert!(registry.is_listening(EventKind::KeyDown));
        assert_eq!(keys.kind(), EventKind::KeyDown);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let sub = registry.subscribe(EventKind::PointerDown);
        drop(registry);
        assert!(!sub.is_attached());
        drop(sub);
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Explicit registry of the global listeners the controller holds. Nothing is cleaned up
//! implicitly: each listener is added when its owner enters the state that needs it and
//! removed when it leaves. A repeated show / hide cycle therefore never leaks one.
//!
//! | Listener                         | Held while |
//! |----------------------------------|------------|
//! | [`ListenerKind::PointerMove`]    | Visible    |
//! | [`ListenerKind::OutsideClick`]   | Mounted    |

use smallvec::SmallVec;
use strum_macros::{AsRefStr, Display};

use crate::DEBUG_KEYPAD_MOD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum ListenerKind {
    /// Drag samples (touch move) used to reposition the overlay.
    PointerMove,
    /// Pointer-down anywhere, used to hide the overlay.
    OutsideClick,
}

/// Handle returned by [`EventSubscriptions::subscribe`]. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSubscriptions {
    active: SmallVec<[(SubscriptionId, ListenerKind); 2]>,
    next_id: u64,
}

impl EventSubscriptions {
    /// Registers a listener of `kind` and returns its handle.
    pub fn subscribe(&mut self, kind: ListenerKind) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.active.push((id, kind));

        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎧 Subscribe listener",
                kind = %kind,
                id = ?id,
                active_count = %self.active.len()
            );
        });

        id
    }

    /// Removes the listener with `id`. Returns `false` if it was not registered, eg: it
    /// was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.active.iter().position(|(it, _)| *it == id) else {
            return false;
        };
        let (_, kind) = self.active.remove(index);

        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔇 Unsubscribe listener",
                kind = %kind,
                id = ?id,
                active_count = %self.active.len()
            );
        });

        true
    }

    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.active.iter().any(|(it, _)| *it == id)
    }

    /// Number of active listeners of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: ListenerKind) -> usize {
        self.active.iter().filter(|(_, it)| *it == kind).count()
    }

    #[must_use]
    pub fn active_count(&self) -> usize { self.active.len() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut subscriptions = EventSubscriptions::default();
        let move_id = subscriptions.subscribe(ListenerKind::PointerMove);
        let click_id = subscriptions.subscribe(ListenerKind::OutsideClick);
        assert_ne!(move_id, click_id);
        assert_eq!(subscriptions.active_count(), 2);
        assert_eq!(subscriptions.count_of(ListenerKind::PointerMove), 1);

        assert!(subscriptions.unsubscribe(move_id));
        assert!(!subscriptions.is_subscribed(move_id));
        assert!(subscriptions.is_subscribed(click_id));
        assert_eq!(subscriptions.count_of(ListenerKind::PointerMove), 0);
    }

    #[test]
    fn test_unsubscribe_twice() {
        let mut subscriptions = EventSubscriptions::default();
        let id = subscriptions.subscribe(ListenerKind::OutsideClick);
        assert!(subscriptions.unsubscribe(id));
        assert!(!subscriptions.unsubscribe(id));
        assert_eq!(subscriptions.active_count(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subscriptions = EventSubscriptions::default();
        let first = subscriptions.subscribe(ListenerKind::PointerMove);
        subscriptions.unsubscribe(first);
        let second = subscriptions.subscribe(ListenerKind::PointerMove);
        assert!(second > first);
    }
}

//! Change notification for controls.
//!
//! A [`Signal`] holds a set of connected slots (closures) and invokes them,
//! in the emitting thread, whenever the signal is emitted. Controls expose
//! their signals as public fields, e.g. `value_changed`.
//!
//! # Example
//!
//! ```
//! use horizon_forms_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// Slots run synchronously on the thread that calls [`emit`](Self::emit).
/// Their order is unspecified: slot keys are reused after a disconnect, so
/// a later connection may run before an earlier one.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot the slots so a slot may connect or disconnect while running.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");
        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| *count_clone.lock() += 1);

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(*count.lock(), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<String>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_reconnect_runs_every_live_slot() {
        let signal = Signal::<()>::new();
        let ran = Arc::new(Mutex::new(Vec::new()));

        let slot = |name: &'static str| {
            let ran = ran.clone();
            move |_: &()| ran.lock().push(name)
        };
        let first = signal.connect(slot("first"));
        signal.connect(slot("second"));
        signal.disconnect(first);
        signal.connect(slot("third"));

        signal.emit(());
        let mut ran = ran.lock().clone();
        ran.sort_unstable();
        assert_eq!(ran, ["second", "third"]);
    }

    #[test]
    fn test_slot_may_connect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = signal.clone();
        signal.connect(move |_| {
            inner.connect(|_| {});
        });

        signal.emit(());
        assert_eq!(signal.connection_count(), 2);
    }
}

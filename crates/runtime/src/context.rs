//! Per-call transaction context.

use bazaar_types::Address;

use crate::events::EventManager;

/// Context the runtime passes explicitly into every call handler.
///
/// Carries the sender of the validated message, the current block height,
/// and the event sink for this transaction. Handlers never reach for
/// ambient state; everything call-scoped travels through this value.
pub struct TxContext {
    /// Sender of the transaction.
    pub sender: Address,
    /// Current block height.
    pub height: u64,
    /// Event sink; discarded with the rest of the transaction on failure.
    pub events: EventManager,
}

impl TxContext {
    pub fn new(sender: impl Into<Address>, height: u64) -> Self {
        Self {
            sender: sender.into(),
            height,
            events: EventManager::new(),
        }
    }
}

//! Store-backed state for the addressbook module.
//!
//! Key layout: `0x01 | creator 0x00 network 0x00 label` -> `AddressRecord`.
//! The NUL separators keep composite keys unambiguous; handler validation
//! rejects components containing NUL.

use bazaar_runtime::store::{self, KvStore, StoreError};
use bazaar_runtime::{paginate_prefix, MemStore};
use bazaar_types::{AddressRecord, PageRequest, PageResponse};

const RECORD_KEY_PREFIX: [u8; 1] = [0x01];

fn record_key(creator: &str, network: &str, label: &str) -> Vec<u8> {
    let mut key = RECORD_KEY_PREFIX.to_vec();
    key.extend_from_slice(creator.as_bytes());
    key.push(0);
    key.extend_from_slice(network.as_bytes());
    key.push(0);
    key.extend_from_slice(label.as_bytes());
    key
}

/// The addressbook module's view of its store.
#[derive(Debug)]
pub struct AddressbookState<S: KvStore> {
    store: S,
}

impl AddressbookState<MemStore> {
    pub fn in_memory() -> Self {
        Self::new(MemStore::new())
    }
}

impl<S: KvStore> AddressbookState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn record(
        &self,
        creator: &str,
        network: &str,
        label: &str,
    ) -> Result<Option<AddressRecord>, StoreError> {
        store::get_value(&self.store, &record_key(creator, network, label))
    }

    pub fn set_record(&mut self, record: &AddressRecord) -> Result<(), StoreError> {
        store::set_value(
            &mut self.store,
            record_key(&record.creator, &record.network, &record.label),
            record,
        )
    }

    pub fn delete_record(&mut self, creator: &str, network: &str, label: &str) {
        self.store.delete(&record_key(creator, network, label));
    }

    /// List records in key order.
    pub fn records(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<AddressRecord>, PageResponse), StoreError> {
        paginate_prefix(&self.store, &RECORD_KEY_PREFIX, request, |key, value| {
            store::decode(key, value)
        })
    }
}

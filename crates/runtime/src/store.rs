//! Ordered key-value storage.
//!
//! `KvStore` is the persistence surface the host framework hands to a
//! module: ordered byte-keyed storage with prefix iteration. `MemStore` is
//! the in-memory implementation backing the mock chain and tests.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

/// Errors from typed store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to decode value at key {key}: {reason}")]
    Decode { key: String, reason: String },

    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// Ordered key-value store with prefix iteration.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>);

    fn delete(&mut self, key: &[u8]);

    /// Iterate entries whose key starts with `prefix`, in ascending key
    /// order.
    fn iter_prefix<'a>(
        &'a self,
        prefix: &'a [u8],
    ) -> Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>;
}

/// In-memory ordered store.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    fn iter_prefix<'a>(
        &'a self,
        prefix: &'a [u8],
    ) -> Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a> {
        Box::new(
            self.entries
                .range(prefix.to_vec()..)
                .take_while(move |(key, _)| key.starts_with(prefix))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}

/// Encode a value with the state codec.
pub fn encode<T: BorshSerialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    borsh::to_vec(value).map_err(|err| StoreError::Encode(err.to_string()))
}

/// Decode a value read at `key`.
pub fn decode<T: BorshDeserialize>(key: &[u8], bytes: &[u8]) -> Result<T, StoreError> {
    T::try_from_slice(bytes).map_err(|err| StoreError::Decode {
        key: key.escape_ascii().to_string(),
        reason: err.to_string(),
    })
}

/// Read and decode the value at `key`, if present.
pub fn get_value<S, T>(store: &S, key: &[u8]) -> Result<Option<T>, StoreError>
where
    S: KvStore + ?Sized,
    T: BorshDeserialize,
{
    store.get(key).map(|bytes| decode(key, &bytes)).transpose()
}

/// Encode and write a value at `key`.
pub fn set_value<S, T>(store: &mut S, key: Vec<u8>, value: &T) -> Result<(), StoreError>
where
    S: KvStore + ?Sized,
    T: BorshSerialize,
{
    let bytes = encode(value)?;
    store.set(key, bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_delete() {
        let mut store = MemStore::new();
        assert!(store.is_empty());

        store.set(b"a".to_vec(), b"1".to_vec());
        assert_eq!(store.get(b"a"), Some(b"1".to_vec()));
        assert_eq!(store.len(), 1);

        store.delete(b"a");
        assert_eq!(store.get(b"a"), None);
    }

    #[test]
    fn test_iter_prefix_is_ordered_and_bounded() {
        let mut store = MemStore::new();
        store.set(b"aa".to_vec(), b"1".to_vec());
        store.set(b"ab".to_vec(), b"2".to_vec());
        store.set(b"b".to_vec(), b"3".to_vec());

        let keys: Vec<Vec<u8>> = store.iter_prefix(b"a").map(|(key, _)| key).collect();
        assert_eq!(keys, vec![b"aa".to_vec(), b"ab".to_vec()]);
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut store = MemStore::new();
        set_value(&mut store, b"n".to_vec(), &42u64).unwrap();
        let read: Option<u64> = get_value(&store, b"n").unwrap();
        assert_eq!(read, Some(42));
    }

    #[test]
    fn test_decode_error_names_key() {
        let mut store = MemStore::new();
        store.set(b"n".to_vec(), vec![0x01]);
        let err = get_value::<_, u64>(&store, b"n").unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}

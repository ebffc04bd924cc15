//! Offset and cursor pagination over store prefix scans.

use bazaar_types::{PageRequest, PageResponse};

use crate::store::{KvStore, StoreError};

/// Page size applied when a request leaves `limit` at 0.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Collect one page of decoded entries under `prefix`.
///
/// A `key` cursor resumes at the given key (relative to the prefix) and
/// takes precedence over `offset`. `next_key` in the response is the first
/// unreturned key, again relative to the prefix. Totals are only computed
/// for offset pagination.
pub fn paginate_prefix<S, T, F>(
    store: &S,
    prefix: &[u8],
    request: &PageRequest,
    decode: F,
) -> Result<(Vec<T>, PageResponse), StoreError>
where
    S: KvStore + ?Sized,
    F: Fn(&[u8], &[u8]) -> Result<T, StoreError>,
{
    let limit = if request.limit == 0 {
        DEFAULT_PAGE_LIMIT
    } else {
        request.limit
    } as usize;

    let mut items = Vec::new();
    let mut next_key = None;

    if let Some(start) = &request.key {
        for (key, value) in store.iter_prefix(prefix) {
            let suffix = &key[prefix.len()..];
            if suffix < start.as_slice() {
                continue;
            }
            if items.len() == limit {
                next_key = Some(suffix.to_vec());
                break;
            }
            items.push(decode(&key, &value)?);
        }
        return Ok((items, PageResponse { next_key, total: None }));
    }

    let mut seen: u64 = 0;
    for (key, value) in store.iter_prefix(prefix) {
        let position = seen;
        seen += 1;
        if position < request.offset {
            continue;
        }
        if items.len() < limit {
            items.push(decode(&key, &value)?);
            continue;
        }
        if next_key.is_none() {
            next_key = Some(key[prefix.len()..].to_vec());
        }
        if !request.count_total {
            break;
        }
    }

    let total = request.count_total.then_some(seen);
    Ok((items, PageResponse { next_key, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn seeded_store() -> MemStore {
        let mut store = MemStore::new();
        for i in 0..5u8 {
            store.set(vec![0x01, i], vec![i]);
        }
        // An entry outside the prefix must never leak into a page.
        store.set(vec![0x02, 0x00], vec![0xff]);
        store
    }

    fn decode_byte(_key: &[u8], value: &[u8]) -> Result<u8, StoreError> {
        Ok(value[0])
    }

    #[test]
    fn test_by_offset() {
        let store = seeded_store();

        let (items, page) =
            paginate_prefix(&store, &[0x01], &PageRequest::by_offset(0, 2), decode_byte).unwrap();
        assert_eq!(items, vec![0, 1]);
        assert_eq!(page.next_key, Some(vec![2]));
        assert_eq!(page.total, None);

        let (items, page) =
            paginate_prefix(&store, &[0x01], &PageRequest::by_offset(4, 2), decode_byte).unwrap();
        assert_eq!(items, vec![4]);
        assert_eq!(page.next_key, None);
    }

    #[test]
    fn test_by_key() {
        let store = seeded_store();

        let (items, page) =
            paginate_prefix(&store, &[0x01], &PageRequest::by_key(vec![2], 2), decode_byte)
                .unwrap();
        assert_eq!(items, vec![2, 3]);
        assert_eq!(page.next_key, Some(vec![4]));

        let (items, page) =
            paginate_prefix(&store, &[0x01], &PageRequest::by_key(vec![4], 2), decode_byte)
                .unwrap();
        assert_eq!(items, vec![4]);
        assert_eq!(page.next_key, None);
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_walk_all_pages_by_key() {
        let store = seeded_store();
        let mut collected = Vec::new();
        let mut cursor = None;

        loop {
            let request = match cursor.take() {
                Some(key) => PageRequest::by_key(key, 2),
                None => PageRequest::by_offset(0, 2),
            };
            let (items, page) =
                paginate_prefix(&store, &[0x01], &request, decode_byte).unwrap();
            collected.extend(items);
            match page.next_key {
                Some(key) => cursor = Some(key),
                None => break,
            }
        }

        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_count_total() {
        let store = seeded_store();

        let (items, page) = paginate_prefix(
            &store,
            &[0x01],
            &PageRequest::by_offset(0, 2).with_total(),
            decode_byte,
        )
        .unwrap();
        assert_eq!(items, vec![0, 1]);
        assert_eq!(page.total, Some(5));
    }

    #[test]
    fn test_zero_limit_uses_default() {
        let store = seeded_store();
        let (items, page) =
            paginate_prefix(&store, &[0x01], &PageRequest::by_offset(0, 0), decode_byte).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(page.next_key, None);
    }
}

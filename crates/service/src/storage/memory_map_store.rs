use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory key-value map store.
///
/// Readers share the lock; every mutation runs under the write lock so that
/// a check followed by an insert/remove is a single critical section.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Ord + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Build a store pre-populated with the given entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self { inner: Arc::new(RwLock::new(entries.into_iter().collect())) }
    }

    /// All values, ordered by ascending key.
    pub async fn list_sorted(&self) -> Vec<V> {
        let map = self.inner.read().await;
        let mut keys: Vec<&K> = map.keys().collect();
        keys.sort();
        keys.into_iter().filter_map(|k| map.get(k).cloned()).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Apply a mutation to the underlying map under the write lock.
    pub async fn update_map<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<R, E>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_sorted_orders_by_key() {
        let store = MemoryMapStore::from_entries([
            ("c".to_string(), 3),
            ("a".to_string(), 1),
            ("b".to_string(), 2),
        ]);
        assert_eq!(store.list_sorted().await, vec![1, 2, 3]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn update_map_error_leaves_map_untouched() {
        let store: MemoryMapStore<String, i32> = MemoryMapStore::new();
        assert!(store.is_empty().await);

        let res: Result<(), &str> = store
            .update_map(|m| {
                if m.contains_key("a") {
                    return Err("exists");
                }
                m.insert("a".into(), 1);
                Ok(())
            })
            .await;
        assert!(res.is_ok());

        let res: Result<(), &str> = store
            .update_map(|m| {
                if m.contains_key("a") {
                    return Err("exists");
                }
                m.insert("a".into(), 2);
                Ok(())
            })
            .await;
        assert_eq!(res, Err("exists"));
        assert_eq!(store.get(&"a".to_string()).await, Some(1));
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store: MemoryMapStore<String, i32> = MemoryMapStore::new();
        let other = store.clone();
        other
            .update_map::<_, _, ()>(|m| {
                m.insert("k".into(), 7);
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(store.get(&"k".to_string()).await, Some(7));
    }
}

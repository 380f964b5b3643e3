//! Utility traits for `ProbingHashMap`

use crate::ProbingHashMap;
use std::hash::Hash;

/// Extension trait for map implementations that provides owned snapshots of their contents
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec, in slot order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec, in slot order
    fn values(&self) -> Vec<V>;
}

impl<K, V> HashMapExtensions<K, V> for ProbingHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_values() {
        let map: ProbingHashMap<String, i32> =
            [("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)].into_iter().collect();

        let mut keys = map.keys();
        keys.sort();

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_follow_removal() {
        let mut map: ProbingHashMap<u32, u32> = (0..10).map(|i| (i, i * i)).collect();
        map.remove(&4);
        map.remove(&7);

        let mut keys = map.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec![0, 1, 2, 3, 5, 6, 8, 9]);
        assert_eq!(map.values().len(), 8);
    }

    #[test]
    fn test_empty_snapshots() {
        let map: ProbingHashMap<String, String> = ProbingHashMap::new();
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
    }
}

//! Snapshot helpers shared by [`ChainedHashMap`] and [`Dictionary`]

use crate::{ChainedHashMap, Dictionary};

/// Extension trait materializing the contents of a table into owned vectors.
///
/// Every call walks the buckets in index order and each chain in link order,
/// so repeated calls on an unchanged table agree with each other. Callers
/// should not rely on the order beyond that.
pub trait TableExtensions<K, V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the table as a Vec
    fn items(&self) -> Vec<(K, V)>;
}

impl<K, V> TableExtensions<K, V> for ChainedHashMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn items(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V> TableExtensions<K, V> for Dictionary<K, V>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.as_map().keys()
    }

    fn values(&self) -> Vec<V> {
        self.as_map().values()
    }

    fn items(&self) -> Vec<(K, V)> {
        self.as_map().items()
    }
}

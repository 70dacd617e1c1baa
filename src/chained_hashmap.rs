use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    iter::{self, FusedIterator},
    mem, slice,
};

use log::{debug, trace};

/// Number of buckets a freshly constructed table starts with
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor, as a percentage of capacity, at which the bucket array doubles
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: usize = 75;

/// Clears the sign bit so the hash always reads as a non-negative signed integer
const NONNEGATIVE_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Owned link to the next entry of a chain, or the head of a bucket
type Link<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value pair linked into a bucket's collision chain
struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
    /// The following entry in the same bucket
    next: Link<K, V>,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry that is not linked into any chain yet
    fn new(key: K, value: V) -> Self {
        Self { key, value, next: None }
    }
}

/// Hashes a key with the table's fixed hasher and masks the result to the
/// non-negative half of the signed 64-bit range.
fn nonnegative_hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish() & NONNEGATIVE_MASK
}

/// Allocates `capacity` empty buckets
fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

/// Unlinks a chain one entry at a time so long chains never recurse on drop
fn unlink_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

/// Copies a chain front to back, appending through a tail cursor
fn clone_chain<K: Clone, V: Clone>(head: &Link<K, V>) -> Link<K, V> {
    let mut copy = None;
    let mut tail = &mut copy;
    let mut source = head.as_deref();

    while let Some(entry) = source {
        let node = tail.insert(Box::new(Entry::new(entry.key.clone(), entry.value.clone())));
        tail = &mut node.next;
        source = entry.next.as_deref();
    }

    copy
}

/// Number of entries reachable from a bucket head
fn chain_length<K, V>(head: &Link<K, V>) -> usize {
    iter::successors(head.as_deref(), |entry| entry.next.as_deref()).count()
}

/// A hash table resolving collisions by separate chaining.
///
/// Every bucket holds the head of a singly linked chain of owned entries.
/// A key always lives in the bucket `nonnegative_hash(key) % capacity` for
/// the current capacity. Once an insertion brings the number of entries to
/// the load factor threshold (75% by default) the bucket array doubles and
/// every entry is relinked under the new capacity.
///
/// Note: This implementation is not thread-safe. Wrap it in a `Mutex` to share
/// it between threads.
pub struct ChainedHashMap<K, V> {
    /// Chain heads, one per bucket
    buckets: Vec<Link<K, V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Threshold for load factor before resizing - stored as percentage (1-95)
    load_factor_threshold: usize,
}

/// Occupancy figures for the chains of a [`ChainedHashMap`]
#[derive(Debug, Clone, Copy)]
pub struct ChainStats {
    /// Length of the bucket array
    pub buckets: usize,
    /// Number of live entries
    pub entries: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Entries divided by buckets
    pub load_factor: f64,
}

impl ChainStats {
    /// Average length of the non-empty chains, zero for an empty table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.entries as f64 / self.occupied_buckets as f64
        }
    }
}

impl<K, V> Clone for ChainedHashMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.iter().map(clone_chain).collect(),
            size: self.size,
            load_factor_threshold: self.load_factor_threshold,
        }
    }
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for ChainedHashMap<K, V> {
    fn drop(&mut self) {
        for head in &mut self.buckets {
            unlink_chain(head.take());
        }
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two and is never zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();

        Self {
            buckets: empty_buckets(capacity),
            size: 0,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the growth threshold as a percentage of capacity
    #[must_use]
    pub fn load_factor_threshold(&self) -> usize {
        self.load_factor_threshold
    }

    /// Provide a way to configure the load factor threshold.
    ///
    /// Takes effect on the next insertion of a new key.
    pub fn set_load_factor_threshold(&mut self, threshold: usize) {
        self.load_factor_threshold = threshold.clamp(1, 95); // Keep within reasonable range
    }

    /// Removes every entry while keeping the current number of buckets
    pub fn clear(&mut self) {
        trace!("clearing {} entries from {} buckets", self.size, self.buckets.len());
        for head in &mut self.buckets {
            unlink_chain(head.take());
        }
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in bucket order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), current: None, remaining: self.size }
    }

    /// Returns the length of every chain, indexed by bucket
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(chain_length).collect()
    }

    /// Summarizes how entries are spread over the buckets
    #[must_use]
    pub fn chain_stats(&self) -> ChainStats {
        let lengths = self.chain_lengths();

        ChainStats {
            buckets: self.buckets.len(),
            entries: self.size,
            occupied_buckets: lengths.iter().filter(|&&length| length > 0).count(),
            longest_chain: lengths.iter().copied().max().unwrap_or(0),
            load_factor: self.load_factor(),
        }
    }

    /// Gets the bucket a key belongs to under the current capacity
    fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        let capacity = u64::try_from(self.buckets.len()).unwrap_or(u64::MAX);
        nonnegative_hash(key)
            .checked_rem(capacity)
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(0)
    }

    /// True once the entry count has reached the growth threshold
    fn at_threshold(&self) -> bool {
        self.size.saturating_mul(100) >=
            self.buckets.len().saturating_mul(self.load_factor_threshold)
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Inserts a key-value pair into the table.
    ///
    /// If the key is already present its value is overwritten in place and the
    /// previous value is returned; the entry count does not change. Otherwise
    /// the pair is appended to the tail of its chain, and the bucket array
    /// doubles if the table has reached its load factor threshold.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.attach(Box::new(Entry::new(key, value)));

        if previous.is_none() && self.at_threshold() {
            self.resize();
        }

        previous
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut link = self.buckets.get(self.bucket_index(key))?.as_deref();

        while let Some(entry) = link {
            if entry.key.borrow() == key {
                return Some(&entry.value);
            }
            link = entry.next.as_deref();
        }

        None
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut link = self.buckets.get_mut(index)?.as_deref_mut();

        while let Some(entry) = link {
            if entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            link = entry.next.as_deref_mut();
        }

        None
    }

    /// Returns true if the table holds an entry for the key
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes a key from the table, returning its value if it was present.
    ///
    /// A missing key leaves the table untouched.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut link = self.buckets.get_mut(index)?;

        while link.as_ref().is_some_and(|entry| entry.key.borrow() != key) {
            if let Some(entry) = link {
                link = &mut entry.next;
            }
        }

        let removed = link.take()?;
        let Entry { value, next, .. } = *removed;
        *link = next;
        self.size = self.size.saturating_sub(1);

        Some(value)
    }

    /// Links an entry into the chain for its key.
    ///
    /// Overwrites the value of an equal key and hands back the old value, or
    /// appends the entry at the chain's tail and counts it.
    fn attach(&mut self, entry: Box<Entry<K, V>>) -> Option<V> {
        let index = self.bucket_index(&entry.key);
        let mut link = self.buckets.get_mut(index)?;

        while let Some(existing) = link {
            if existing.key == entry.key {
                return Some(mem::replace(&mut existing.value, entry.value));
            }
            link = &mut existing.next;
        }

        *link = Some(entry);
        self.size = self.size.saturating_add(1);

        None
    }

    /// Doubles the bucket array and relinks every entry under the new capacity
    fn resize(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        debug!(
            "growing bucket array from {} to {} buckets ({} entries)",
            self.buckets.len(),
            new_capacity,
            self.size
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;

        for mut link in old_buckets {
            while let Some(mut entry) = link {
                link = entry.next.take();
                self.attach(entry);
            }
        }
    }
}

/// Iterator over the key-value pairs of the hash table
pub struct Iter<'a, K, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Link<K, V>>,
    /// Next entry of the chain being walked
    current: Option<&'a Entry<K, V>>,
    /// Entries left to yield
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &entry.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Checked dictionary contract over [`ChainedHashMap`].
//!
//! Arguments that may be absent are taken as `Option`s; an absent key or
//! value is rejected with [`DictError::InvalidArgument`] before the table is
//! touched.

use std::{borrow::Borrow, hash::Hash};

use log::debug;

use crate::{ChainedHashMap, DictError};

/// Reason reported when a key is absent
const ABSENT_KEY: &str = "key must not be absent";

/// Reason reported when a value is absent
const ABSENT_VALUE: &str = "value must not be absent";

/// Unwraps a key argument or rejects the call
fn require_key<Q: ?Sized>(key: Option<&Q>) -> Result<&Q, DictError> {
    key.ok_or_else(|| {
        debug!("rejected call with absent key");
        DictError::InvalidArgument(ABSENT_KEY)
    })
}

/// A dictionary that validates its arguments before delegating to a
/// [`ChainedHashMap`].
///
/// When calling `get`, `remove` or `contains_key` with `None`, the borrowed
/// key type cannot be inferred; spell it out, e.g. `None::<&str>`.
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    /// Backing table
    table: ChainedHashMap<K, V>,
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<ChainedHashMap<K, V>> for Dictionary<K, V> {
    fn from(table: ChainedHashMap<K, V>) -> Self {
        Self { table }
    }
}

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary with the default number of buckets
    #[must_use]
    pub fn new() -> Self {
        Self { table: ChainedHashMap::new() }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the dictionary holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets of the backing table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every entry; the number of buckets is kept
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Borrows the backing table
    #[must_use]
    pub fn as_map(&self) -> &ChainedHashMap<K, V> {
        &self.table
    }

    /// Unwraps the backing table
    #[must_use]
    pub fn into_inner(self) -> ChainedHashMap<K, V> {
        self.table
    }
}

impl<K, V> Dictionary<K, V>
where
    K: Eq + Hash,
{
    /// Adds a pair, or overwrites the value of an existing key.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::InvalidArgument`] if the value or the key is
    /// absent. The value is checked first. Nothing is modified on error.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) -> Result<(), DictError> {
        let Some(value) = value else {
            debug!("rejected put with absent value");
            return Err(DictError::InvalidArgument(ABSENT_VALUE));
        };
        let Some(key) = key else {
            debug!("rejected put with absent key");
            return Err(DictError::InvalidArgument(ABSENT_KEY));
        };

        self.table.insert(key, value);
        Ok(())
    }

    /// Looks up the value for a key; `Ok(None)` when the key is not present.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::InvalidArgument`] if the key is absent.
    pub fn get<Q>(&self, key: Option<&Q>) -> Result<Option<&V>, DictError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = require_key(key)?;
        Ok(self.table.get(key))
    }

    /// Removes a key; removing a key that is not present does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::InvalidArgument`] if the key is absent.
    pub fn remove<Q>(&mut self, key: Option<&Q>) -> Result<(), DictError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = require_key(key)?;
        self.table.remove(key);
        Ok(())
    }

    /// Reports whether a key is present.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::InvalidArgument`] if the key is absent.
    pub fn contains_key<Q>(&self, key: Option<&Q>) -> Result<bool, DictError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = require_key(key)?;
        Ok(self.table.contains_key(key))
    }
}

//! # Chained Hash Map
//!
//! A Rust implementation of a hash table with separate chaining and doubling growth.
//!
//! This crate provides two entry points:
//!
//! - `ChainedHashMap`: the table itself, with an idiomatic, infallible API
//! - `Dictionary`: a checked contract over the same table that takes possibly absent keys and
//!   values and rejects them with `DictError::InvalidArgument`
//!
//! Each bucket holds an owned, singly linked chain of entries. A table starts with 16 buckets
//! and doubles as soon as it holds 75% as many entries as it has buckets; every entry is then
//! relinked into the bucket it hashes to under the new capacity. Clearing a table keeps its
//! buckets.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Checked Usage
//!
//! ```rust
//! use chainmap::{DictError, Dictionary, TableExtensions};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.put(Some("Uno".to_string()), Some(1))?;
//! dictionary.put(Some("Dos".to_string()), Some(2))?;
//!
//! assert_eq!(dictionary.get(Some("Uno"))?, Some(&1));
//! assert!(matches!(dictionary.put(Some("Tres".to_string()), None), Err(DictError::InvalidArgument(_))));
//! assert!(dictionary.get(None::<&str>).is_err());
//!
//! let mut keys = dictionary.keys();
//! keys.sort();
//! assert_eq!(keys, ["Dos", "Uno"]);
//! # Ok::<(), DictError>(())
//! ```

/// Module implementing the separately chained hash table
mod chained_hashmap;
/// Module implementing the checked dictionary contract
mod dictionary;
/// Error type of the checked contract
mod error;
pub mod logger;
/// Utility traits for the tables
mod utils;

pub use chained_hashmap::{
    ChainStats, ChainedHashMap, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD, Iter,
};
pub use dictionary::Dictionary;
pub use error::DictError;
pub use utils::TableExtensions;

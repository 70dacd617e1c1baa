//! Scripted walk through the checked `Dictionary` contract.
//!
//! Run with `RUST_LOG=debug` to also see growth and rejection events.

use chainmap::{Dictionary, TableExtensions, logger::initialize_logger};
use log::info;

/// Number of generated keys inserted to force several resizes
const BULK_KEYS: i32 = 100;

/// Number of pairs printed from the items snapshot
const PREVIEW_ITEMS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let mut dictionary: Dictionary<String, i32> = Dictionary::new();

    // Insertion and lookup
    dictionary.put(Some("Uno".to_string()), Some(1))?;
    println!("Inserted [\"Uno\", 1]");
    println!("Value for \"Uno\": {:?}", dictionary.get(Some("Uno"))?);

    // Update in place
    dictionary.put(Some("Uno".to_string()), Some(11))?;
    println!("Updated [\"Uno\", 11]");
    println!("Updated value for \"Uno\": {:?}", dictionary.get(Some("Uno"))?);

    // Absent keys are rejected
    match dictionary.put(None, Some(2)) {
        Err(err) => println!("Rejected absent key: {err}"),
        Ok(()) => println!("Absent key was accepted"),
    }

    // Removal
    dictionary.put(Some("Dos".to_string()), Some(2))?;
    dictionary.remove(Some("Dos"))?;
    println!("Removed \"Dos\". Present after removal: {}", dictionary.contains_key(Some("Dos"))?);

    // Growth
    let capacity_before = dictionary.capacity();
    for i in 0..BULK_KEYS {
        dictionary.put(Some(format!("Clave{i}")), Some(i))?;
    }
    println!("Inserted {BULK_KEYS} entries. Size after insertion: {}", dictionary.size());
    info!("bucket array grew from {} to {} buckets", capacity_before, dictionary.capacity());

    // Snapshots
    println!("Keys: {:?}", dictionary.keys());
    println!("Values: {:?}", dictionary.values());
    println!("Items (first {PREVIEW_ITEMS}):");
    for (key, value) in dictionary.items().into_iter().take(PREVIEW_ITEMS) {
        println!("[{key}, {value}]");
    }

    // Clear keeps the buckets
    dictionary.clear();
    println!(
        "Dictionary cleared. Size after clear: {}, buckets kept: {}",
        dictionary.size(),
        dictionary.capacity()
    );

    Ok(())
}

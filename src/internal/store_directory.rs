//! Walks a small store directory through insert, lookup and removal.

use probing_map::{ProbingHashMap, logger::initialize_logger};

/// Printed in place of a value for a store that is not in the directory
const ABSENT: &str = "<absent>";

fn main() {
    initialize_logger();

    let mut directory = ProbingHashMap::new();
    directory.insert("Walmart", "Supercenter");
    directory.insert("Target", "Retail Store");
    directory.insert("Dollar Tree", "Discount Store");

    println!("Size of map: {}", directory.len());
    println!(
        "Type of store at 'Target': {}",
        directory.get("Target").copied().unwrap_or(ABSENT)
    );

    directory.remove("Target");
    println!("Size of map after removing 'Target': {}", directory.len());
    println!(
        "Type of store at 'Target' after removal: {}",
        directory.get("Target").copied().unwrap_or(ABSENT)
    );
}

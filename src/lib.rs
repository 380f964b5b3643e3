//! # Probing Hash Map
//!
//! A Rust implementation of an open-addressing hash map with linear probing.
//!
//! All entries live in a single slot array. Collisions are resolved by scanning forward from a
//! key's home slot, the array doubles once it is half full, and every removal rebuilds the
//! remaining entries so probe chains never contain holes.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probing_map::ProbingHashMap;
//!
//! // Create a new hash map
//! let mut map = ProbingHashMap::new();
//!
//! // Insert values
//! map.insert("Walmart".to_string(), "Supercenter");
//! map.insert("Target".to_string(), "Retail Store");
//!
//! // Retrieve values
//! assert_eq!(map.get("Target"), Some(&"Retail Store"));
//!
//! // Update values
//! assert_eq!(map.insert("Target".to_string(), "Superstore"), Some("Retail Store"));
//!
//! // Remove values
//! map.remove("Target");
//! assert_eq!(map.get("Target"), None);
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Probe Lengths
//!
//! Lookups scan the whole ring before giving up, so a miss costs one probe per slot.
//!
//! ```rust
//! use probing_map::ProbingHashMap;
//!
//! let map: ProbingHashMap<u32, u32> = (0..5).map(|i| (i, i)).collect();
//! assert_eq!(map.probe_length(&99), map.capacity());
//! assert!(map.probe_length(&2) <= map.len());
//! ```

/// Module installing the `env_logger` backend
pub mod logger;
/// Module implementing the open-addressing hash map
mod probing_map;
/// Utility traits for the hash map
mod utils;

pub use probing_map::{INITIAL_CAPACITY, Iter, LOAD_FACTOR_THRESHOLD, ProbingHashMap};
pub use utils::HashMapExtensions;

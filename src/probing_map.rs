use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    iter, mem, slice,
};

use log::{debug, trace};

/// Number of slots in a freshly constructed map
pub const INITIAL_CAPACITY: usize = 4;

/// Load factor, as a percentage, at which `insert` doubles the slot array
pub const LOAD_FACTOR_THRESHOLD: usize = 50;

/// A single position in the slot array
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never held an entry, or was cleared
    Empty,
    /// Holds a live key-value pair
    Occupied {
        /// The stored key
        key: K,
        /// The value associated with the key
        value: V,
    },
}

impl<K, V> Slot<K, V> {
    /// Borrows the entry held by this slot, if any
    fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Self::Empty => None,
            Self::Occupied { key, value } => Some((key, value)),
        }
    }

    /// Returns true if this slot holds no entry
    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A hash map using open addressing with linear probing.
///
/// Entries live directly in one slot array. A key is looked up by hashing it to a home slot
/// and scanning forward, wrapping at the end, until the key is found or every slot has been
/// visited. The scan does not stop at empty slots, so a miss always costs `capacity` probes.
///
/// The slot array starts at [`INITIAL_CAPACITY`] and doubles whenever an insert finds the
/// load factor at or above [`LOAD_FACTOR_THRESHOLD`] percent. Removing an entry rebuilds the
/// whole table at the same capacity, which keeps every probe chain unbroken without tombstones.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock for shared mutation.
#[derive(Debug, Clone)]
pub struct ProbingHashMap<K, V> {
    /// The slot array storing the key-value pairs
    slots: Box<[Slot<K, V>]>,
    /// Current number of occupied slots
    size: usize,
}

/// Builds a slot array of `capacity` empty slots
fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Visits every index of a ring of `capacity` slots once, starting at `start`
fn probe_sequence(start: usize, capacity: usize) -> impl Iterator<Item = usize> {
    (start..capacity).chain(0..start)
}

/// Computes the raw hash for a key
fn hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

impl<K, V> Default for ProbingHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ProbingHashMap<K, V> {
    /// Creates an empty `ProbingHashMap` with [`INITIAL_CAPACITY`] slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty `ProbingHashMap` with the specified number of slots (at least one)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: empty_slots(capacity.max(1)), size: 0 }
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor of the map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Removes every entry. The capacity is left unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Returns an iterator over the entries in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter() }
    }

    /// Returns true if inserting now must grow the slot array first
    fn at_load_threshold(&self) -> bool {
        self.size.saturating_mul(100) >= self.slots.len().saturating_mul(LOAD_FACTOR_THRESHOLD)
    }
}

impl<K, V> ProbingHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Reduces the hash of a key to its home slot
    #[allow(clippy::cast_possible_truncation)]
    fn home_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        // The remainder is below the slot count, so it always fits back into a usize
        hash(key).checked_rem(self.slots.len() as u64).unwrap_or(0) as usize
    }

    /// Returns true if the slot at `index` holds `key`
    fn holds<Q>(&self, index: usize, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.slots.get(index), Some(Slot::Occupied { key: stored, .. }) if stored.borrow() == key)
    }

    /// Scans the whole ring from the home slot of `key` and returns the slot holding it
    fn find_slot<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        probe_sequence(self.home_index(key), self.slots.len()).find(|&index| self.holds(index, key))
    }

    /// Retrieves the value for a given key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_slot(key)?;
        self.slots.get(index).and_then(Slot::entry).map(|(_, value)| value)
    }

    /// Retrieves a mutable reference to the value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_slot(key)?;
        match self.slots.get_mut(index) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the map holds an entry for the key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_slot(key).is_some()
    }

    /// Returns how many slots a lookup of `key` visits.
    ///
    /// For a present key this is its distance from the home slot plus one. For an absent key
    /// it is the capacity, since the scan walks the full ring.
    #[must_use]
    pub fn probe_length<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        probe_sequence(self.home_index(key), self.slots.len())
            .position(|index| self.holds(index, key))
            .map_or(self.slots.len(), |distance| distance.saturating_add(1))
    }

    /// Inserts a key-value pair, returning the previous value if the key was present
    ///
    /// The load factor is checked before the key is looked up, so an update can grow the map too.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.at_load_threshold() {
            self.resize();
        }

        let found = self.find_slot(&key);
        if let Some(Slot::Occupied { value: stored, .. }) =
            found.and_then(|index| self.slots.get_mut(index))
        {
            return Some(mem::replace(stored, value));
        }

        if self.place(key, value) {
            self.size = self.size.saturating_add(1);
        }
        None
    }

    /// Linear-probes from the home slot of `key` to the first empty slot and fills it
    ///
    /// Never checks for an existing entry with the same key. Returns false only if every slot
    /// is occupied, which the load factor policy rules out.
    fn place(&mut self, key: K, value: V) -> bool {
        let capacity = self.slots.len();
        let free = probe_sequence(self.home_index(&key), capacity)
            .find(|&index| self.slots.get(index).is_some_and(Slot::is_empty));

        match free.and_then(|index| self.slots.get_mut(index)) {
            Some(slot) => {
                *slot = Slot::Occupied { key, value };
                true
            }
            None => false,
        }
    }

    /// Removes a key from the map, returning its value if it was present
    ///
    /// Every successful removal rebuilds the remaining entries at the same capacity.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_slot(key)?;
        let slot = self.slots.get_mut(index)?;
        let Slot::Occupied { value, .. } = mem::replace(slot, Slot::Empty) else {
            return None;
        };
        self.size = self.size.saturating_sub(1);
        self.rehash();
        Some(value)
    }

    /// Doubles the slot array and relocates every entry against the new capacity
    fn resize(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity.saturating_mul(2);
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));

        // Keys are already distinct, so entries go straight to the first free slot
        for slot in old_slots.into_vec() {
            if let Slot::Occupied { key, value } = slot {
                self.place(key, value);
            }
        }

        debug!("grew slot array from {old_capacity} to {new_capacity} slots ({} entries)", self.size);
    }

    /// Empties the slot array at the same capacity and reinserts every remaining entry
    fn rehash(&mut self) {
        let capacity = self.slots.len();
        let old_slots = mem::replace(&mut self.slots, empty_slots(capacity));
        self.size = 0;

        for slot in old_slots.into_vec() {
            if let Slot::Occupied { key, value } = slot {
                self.insert(key, value);
            }
        }

        trace!("rebuilt {capacity} slots after removal ({} entries)", self.size);
    }
}

impl<K, V> Extend<(K, V)> for ProbingHashMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProbingHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a ProbingHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a `ProbingHashMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining slots to visit
    slots: slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(Slot::entry)
    }
}

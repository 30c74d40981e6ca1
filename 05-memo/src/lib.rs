#![forbid(unsafe_code)]

use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

////////////////////////////////////////////////////////////////////////////////

/// Pairs a function with the dictionary of its already computed results.
/// Each distinct key is computed once; later lookups return the stored value.
pub struct Memo<K, V, F> {
    cache: HashMap<K, V>,
    func: F,
}

impl<K, V, F> Memo<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> V,
{
    pub fn new(func: F) -> Self {
        Self {
            cache: HashMap::new(),
            func,
        }
    }

    pub fn get(&mut self, key: K) -> &V {
        match self.cache.entry(key) {
            Entry::Occupied(occupied) => {
                debug!("cache hit");
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => {
                debug!("cache miss");
                let value = (self.func)(vacant.key());
                vacant.insert(value)
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////

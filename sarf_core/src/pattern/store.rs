//! Pattern lookup table.
//!
//! Separate chaining over djb2 hashes of the pattern name. New entries are
//! prepended to their chain; the bucket array doubles whenever the load
//! factor passes the configured maximum. Buckets never shrink.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Pattern;

const MIN_LOAD_FACTOR: f64 = 0.1;
const MAX_LOAD_FACTOR: f64 = 8.0;
const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// djb2 over the raw UTF-8 bytes of `key` with 32-bit wraparound.
#[must_use]
pub fn djb2(key: &str) -> u32 {
    key.bytes()
        .fold(5381u32, |hash, byte| hash.wrapping_mul(33).wrapping_add(u32::from(byte)))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternTableOptions {
    #[serde(default = "PatternTableOptions::default_initial_capacity")]
    pub initial_capacity: usize,
    #[serde(default = "PatternTableOptions::default_max_load_factor")]
    pub max_load_factor: f64,
}

impl Default for PatternTableOptions {
    fn default() -> Self {
        Self {
            initial_capacity: Self::default_initial_capacity(),
            max_load_factor: Self::default_max_load_factor(),
        }
    }
}

impl PatternTableOptions {
    const fn default_initial_capacity() -> usize {
        16
    }

    const fn default_max_load_factor() -> f64 {
        0.75
    }
}

type Link = Option<Box<Entry>>;

#[derive(Debug)]
struct Entry {
    pattern: Pattern,
    next: Link,
}

fn empty_buckets(capacity: usize) -> Vec<Link> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

fn bucket_index(name: &str, capacity: usize) -> usize {
    djb2(name) as usize % capacity
}

#[derive(Debug)]
pub struct PatternStore {
    buckets: Vec<Link>,
    len: usize,
    max_load_factor: f64,
}

impl PatternStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(PatternTableOptions::default())
    }

    /// Capacity is clamped to `1..=MAX_INITIAL_CAPACITY`; a load factor
    /// outside `MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR` falls back to the default.
    #[must_use]
    pub fn with_options(options: PatternTableOptions) -> Self {
        let requested = options.max_load_factor;
        let max_load_factor = if (MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR).contains(&requested) {
            requested
        } else {
            warn!(requested, "max load factor out of range, using default");
            PatternTableOptions::default_max_load_factor()
        };
        let capacity = options.initial_capacity.clamp(1, MAX_INITIAL_CAPACITY);
        if capacity != options.initial_capacity {
            warn!(requested = options.initial_capacity, capacity, "clamped initial capacity");
        }
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            max_load_factor,
        }
    }

    /// Insert or replace a pattern by name. Returns `true` for a new entry.
    pub fn insert(&mut self, pattern: Pattern) -> bool {
        let index = bucket_index(pattern.name(), self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.pattern.name() == pattern.name() {
                debug!(pattern = pattern.name(), "replaced pattern");
                entry.pattern = pattern;
                return false;
            }
            cursor = entry.next.as_deref_mut();
        }

        let next = self.buckets[index].take();
        debug!(pattern = pattern.name(), bucket = index, "inserted pattern");
        self.buckets[index] = Some(Box::new(Entry { pattern, next }));
        self.len += 1;

        while self.load_factor() > self.max_load_factor {
            self.grow();
        }
        true
    }

    fn grow(&mut self) {
        let capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(capacity));
        for mut link in old {
            while let Some(mut entry) = link {
                link = entry.next.take();
                let index = bucket_index(entry.pattern.name(), capacity);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }
        debug!(capacity, size = self.len, "rehashed pattern table");
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        let mut cursor = self.buckets[bucket_index(name, self.buckets.len())].as_deref();
        while let Some(entry) = cursor {
            if entry.pattern.name() == name {
                return Some(&entry.pattern);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Unlink and return the pattern called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Pattern> {
        let index = bucket_index(name, self.buckets.len());
        let mut link = &mut self.buckets[index];
        while link
            .as_ref()
            .is_some_and(|entry| entry.pattern.name() != name)
        {
            link = &mut link.as_mut()?.next;
        }
        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        debug!(pattern = name, size = self.len, "removed pattern");
        Some(removed.pattern)
    }

    /// Snapshot of every pattern, in table order.
    #[must_use]
    pub fn all(&self) -> Vec<Pattern> {
        self.iter().cloned().collect()
    }

    /// Patterns in table order (bucket by bucket, newest first per chain).
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Link>,
    chain: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some(&entry.pattern);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

impl<'a> IntoIterator for &'a PatternStore {
    type Item = &'a Pattern;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

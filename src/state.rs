//! Component-owned state containers
//!
//! - [`CounterState`]: a single integer owned by one component instance
//! - [`Memo`]: a cached value tagged with the dependency key it was built from
//!
//! Neither type is shared. A component holds them as plain fields and mutates
//! them through `&mut self`, so there is nothing to lock.

/// Integer counter state
///
/// No bounds are enforced. Arithmetic wraps at the `i64` limits instead of
/// panicking, so any sequence of transitions is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    count: i64,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    /// Current value
    pub fn get(&self) -> i64 {
        self.count
    }

    /// Replace the value, returning it
    pub fn set(&mut self, count: i64) -> i64 {
        self.count = count;
        count
    }

    /// Apply a signed step, returning the new value
    pub fn step(&mut self, delta: i64) -> i64 {
        self.set(self.count.wrapping_add(delta))
    }
}

/// Memoized value keyed on its dependencies
///
/// `get` returns the cached value while the key is unchanged and rebuilds it
/// when the caller presents a different key. Whatever the value captured,
/// it always corresponds to the key it is stored with.
pub struct Memo<K, V> {
    key: K,
    value: V,
    rebuilds: usize,
}

impl<K: PartialEq + Copy, V> Memo<K, V> {
    /// Build the initial value for `key`
    pub fn new(key: K, build: impl FnOnce(K) -> V) -> Self {
        Self {
            key,
            value: build(key),
            rebuilds: 0,
        }
    }

    /// Value for `key`, rebuilding first if the cached key differs
    pub fn get(&mut self, key: K, build: impl FnOnce(K) -> V) -> &V {
        if self.key != key {
            self.value = build(key);
            self.key = key;
            self.rebuilds += 1;
        }
        &self.value
    }

    /// Key the current value was built from
    pub fn key(&self) -> K {
        self.key
    }

    /// Number of times the value was rebuilt after construction
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}

// Direct-mapped result cache keyed by word

/// Base slot count is `1 << BASE_ORDER`, before size scaling.
const BASE_ORDER: u32 = 10;

/// Largest accepted size parameter; larger values are clamped to it.
pub const MAX_CACHE_SIZE: u32 = 6;

/// Words longer than this (in characters) are not cached.
const MAX_CACHED_WORD_LEN: usize = 48;

/// Simple string hash: `hash * 37 + ch`, reduced modulo `2^order`.
fn word_hash(word: &str, order: u32) -> usize {
    let mask = (1usize << order) - 1;
    word.chars()
        .fold(0usize, |hash, ch| (hash.wrapping_mul(37).wrapping_add(ch as usize)) & mask)
}

/// A fixed-size, hash-indexed cache of per-word results.
///
/// Each word maps to exactly one slot. Collisions overwrite silently; there
/// is no chaining or LRU. The cache never grows after construction.
#[derive(Debug, Clone)]
pub struct ResultCache<V> {
    order: u32,
    slots: Vec<Option<(String, V)>>,
}

impl<V> ResultCache<V> {
    /// Create a cache with `1 << (10 + size_param)` slots, `size_param`
    /// being clamped to [`MAX_CACHE_SIZE`].
    pub fn new(size_param: u32) -> Self {
        let order = BASE_ORDER + size_param.min(MAX_CACHE_SIZE);
        let mut slots = Vec::new();
        slots.resize_with(1 << order, || None);
        Self { order, slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, word: &str) -> Option<&V> {
        match &self.slots[word_hash(word, self.order)] {
            Some((cached, value)) if cached == word => Some(value),
            _ => None,
        }
    }

    /// Store `value` for `word`, evicting whatever shared its slot.
    ///
    /// Empty and overlong words are ignored.
    pub fn insert(&mut self, word: &str, value: V) {
        if word.is_empty() || word.chars().count() > MAX_CACHED_WORD_LEN {
            return;
        }
        let slot = word_hash(word, self.order);
        self.slots[slot] = Some((word.to_string(), value));
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<V: Clone> ResultCache<V> {
    /// Return the cached value for `word`, computing and storing it on a miss.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, word: &str, compute: F) -> V {
        if let Some(value) = self.get(word) {
            return value.clone();
        }
        let value = compute();
        self.insert(word, value.clone());
        value
    }
}

impl<V> Default for ResultCache<V> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_has_no_entries() {
        let cache: ResultCache<bool> = ResultCache::new(0);
        assert_eq!(cache.capacity(), 1024);
        assert_eq!(cache.get("cat"), None);
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ResultCache::new(0);
        cache.insert("cat", true);
        cache.insert("dgo", false);
        assert_eq!(cache.get("cat"), Some(&true));
        assert_eq!(cache.get("dgo"), Some(&false));
    }

    #[test]
    fn empty_and_long_words_are_not_cached() {
        let mut cache = ResultCache::new(0);
        cache.insert("", true);
        assert_eq!(cache.get(""), None);
        let long = "x".repeat(MAX_CACHED_WORD_LEN + 1);
        cache.insert(&long, true);
        assert_eq!(cache.get(&long), None);
    }

    #[test]
    fn collision_overwrites() {
        let mut cache = ResultCache::new(0);
        // Single characters hash to their code point; these share slot 1.
        let a = "\u{1}";
        let b = "\u{401}";
        assert_eq!(word_hash(a, BASE_ORDER), word_hash(b, BASE_ORDER));
        cache.insert(a, 1);
        cache.insert(b, 2);
        assert_eq!(cache.get(a), None);
        assert_eq!(cache.get(b), Some(&2));
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = ResultCache::new(1);
        cache.insert("cat", 3);
        cache.clear();
        assert_eq!(cache.get("cat"), None);
        assert_eq!(cache.capacity(), 2048);
    }

    #[test]
    fn get_or_insert_with_computes_once() {
        let mut cache = ResultCache::new(0);
        let mut calls = 0;
        let first = cache.get_or_insert_with("cat", || {
            calls += 1;
            vec!["cats".to_string()]
        });
        let second = cache.get_or_insert_with("cat", || {
            calls += 1;
            Vec::new()
        });
        assert_eq!(first, second);
        assert_eq!(calls, 1);
    }

    #[test]
    fn size_parameter_is_clamped() {
        let cache: ResultCache<bool> = ResultCache::new(60);
        assert_eq!(cache.capacity(), 1024 << MAX_CACHE_SIZE);
        let cache: ResultCache<bool> = ResultCache::new(u32::MAX);
        assert_eq!(cache.capacity(), 1024 << MAX_CACHE_SIZE);
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(word_hash("медведь", 12), word_hash("медведь", 12));
        assert!(word_hash("медведь", 12) < 1 << 12);
    }
}

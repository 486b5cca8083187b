//! Off-screen surface cache keyed by (size, corner radius, color).
//!
//! Provides:
//! - Bounded LRU storage of rendered surfaces
//! - Memory accounting
//! - Hit/miss statistics

use crate::surface::Surface;
use crate::{Color, Size};
use std::collections::HashMap;
use std::sync::Arc;

/// Identity of a rendered rounded-rectangle surface.
///
/// Floats are keyed by bit pattern so identical inputs map to the same
/// entry and any change of color produces a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceKey {
    width: u32,
    height: u32,
    corner_radius_bits: u32,
    argb: u32,
}

impl SurfaceKey {
    /// Build a key from render inputs.
    #[must_use]
    pub fn new(size: Size, corner_radius: f32, color: Color) -> Self {
        Self {
            width: size.width.to_bits(),
            height: size.height.to_bits(),
            corner_radius_bits: corner_radius.to_bits(),
            argb: color.to_argb(),
        }
    }

    /// Packed color of the keyed surface.
    #[must_use]
    pub const fn argb(&self) -> u32 {
        self.argb
    }
}

/// Configuration for the surface cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Maximum memory in bytes
    pub max_memory: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 8,
            max_memory: 4 * 1024 * 1024, // 4 MB
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that rendered a new surface
    pub misses: u64,
    /// Entries dropped to stay within limits
    pub evictions: u64,
    /// Entries currently held
    pub current_entries: usize,
    /// Bytes currently held
    pub current_memory: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CacheEntry {
    surface: Arc<Surface>,
    last_accessed: u64,
}

/// Bounded LRU cache of rendered surfaces.
pub struct SurfaceCache {
    config: CacheConfig,
    entries: HashMap<SurfaceKey, CacheEntry>,
    current_memory: usize,
    /// Monotonic access clock for LRU ordering
    clock: u64,
    stats: CacheStats,
}

impl std::fmt::Debug for SurfaceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceCache")
            .field("config", &self.config)
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for SurfaceCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl SurfaceCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            current_memory: 0,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached surface for `key`, rendering it with `render` on a miss.
    pub fn get_or_render(&mut self, key: SurfaceKey, render: impl FnOnce() -> Surface) -> Arc<Surface> {
        self.clock += 1;
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_accessed = self.clock;
            self.stats.hits += 1;
            return Arc::clone(&entry.surface);
        }

        self.stats.misses += 1;
        let surface = Arc::new(render());
        let size = surface.byte_len();

        while !self.entries.is_empty()
            && (self.entries.len() >= self.config.max_entries
                || self.current_memory + size > self.config.max_memory)
        {
            if !self.evict_one() {
                break;
            }
        }

        if size <= self.config.max_memory && self.config.max_entries > 0 {
            self.current_memory += size;
            self.entries.insert(
                key,
                CacheEntry {
                    surface: Arc::clone(&surface),
                    last_accessed: self.clock,
                },
            );
        }
        self.sync_stats();
        surface
    }

    /// Check whether a key is cached.
    #[must_use]
    pub fn contains(&self, key: &SurfaceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_memory = 0;
        self.sync_stats();
    }

    /// Get statistics.
    #[must_use]
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes of pixel data held.
    #[must_use]
    pub const fn memory_usage(&self) -> usize {
        self.current_memory
    }

    fn evict_one(&mut self) -> bool {
        let Some(key) = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.last_accessed)
            .map(|(k, _)| *k)
        else {
            return false;
        };
        if let Some(entry) = self.entries.remove(&key) {
            self.current_memory = self
                .current_memory
                .saturating_sub(entry.surface.byte_len());
            self.stats.evictions += 1;
            log::trace!("evicted surface {:#010x}", key.argb());
            return true;
        }
        false
    }

    fn sync_stats(&mut self) {
        self.stats.current_entries = self.entries.len();
        self.stats.current_memory = self.current_memory;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(argb: u32) -> SurfaceKey {
        SurfaceKey::new(Size::new(4.0, 2.0), 1.0, Color::from_argb(argb))
    }

    fn render(argb: u32) -> Surface {
        let mut s = Surface::new(4, 2);
        s.clear(Color::from_argb(argb));
        s
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let mut cache = SurfaceCache::default();
        let a = cache.get_or_render(key(0xff11_2233), || render(0xff11_2233));
        let b = cache.get_or_render(key(0xff11_2233), || panic!("should hit"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert!((cache.stats().hit_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_cache_color_change_renders_fresh() {
        let mut cache = SurfaceCache::default();
        let a = cache.get_or_render(key(0xff00_0000), || render(0xff00_0000));
        let b = cache.get_or_render(key(0xffff_ffff), || render(0xffff_ffff));
        assert_ne!(a.pixels(), b.pixels());
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_lru_eviction() {
        let mut cache = SurfaceCache::new(CacheConfig {
            max_entries: 2,
            ..CacheConfig::default()
        });
        cache.get_or_render(key(1), || render(1));
        cache.get_or_render(key(2), || render(2));
        // Touch 1 so 2 becomes least recently used.
        cache.get_or_render(key(1), || render(1));
        cache.get_or_render(key(3), || render(3));

        assert!(cache.contains(&key(1)));
        assert!(!cache.contains(&key(2)));
        assert!(cache.contains(&key(3)));
        assert_eq!(cache.stats().evictions, 1);
        assert_eq!(cache.stats().current_entries, 2);
    }

    #[test]
    fn test_cache_memory_limit() {
        let mut cache = SurfaceCache::new(CacheConfig {
            max_entries: 16,
            max_memory: 40,
        });
        cache.get_or_render(key(1), || render(1));
        cache.get_or_render(key(2), || render(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 32);
    }

    #[test]
    fn test_cache_oversized_surface_not_stored() {
        let mut cache = SurfaceCache::new(CacheConfig {
            max_entries: 4,
            max_memory: 8,
        });
        let s = cache.get_or_render(key(1), || render(1));
        assert_eq!(s.width(), 4);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = SurfaceCache::default();
        cache.get_or_render(key(1), || render(1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn test_stats_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}

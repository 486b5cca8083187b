//! Off-screen track rendering.

use std::sync::Arc;
use switchkit_core::{CacheConfig, CacheStats, Color, Rect, Size, Surface, SurfaceCache, SurfaceKey};

/// Rasterize a fully rounded track filling `size`.
///
/// The corner radius is clamped to half the short side by the rasterizer.
#[must_use]
pub fn rasterize_track(size: Size, corner_radius: f32, color: Color) -> Surface {
    let mut surface = Surface::with_size(size);
    surface.fill_rounded_rect(Rect::from_size(size), corner_radius, color);
    surface
}

/// Produces track surfaces, reusing previously rendered ones.
#[derive(Debug, Default)]
pub struct TrackRenderer {
    cache: SurfaceCache,
}

impl TrackRenderer {
    /// Create a renderer with the default cache limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom cache limits.
    #[must_use]
    pub fn with_cache_config(config: CacheConfig) -> Self {
        Self {
            cache: SurfaceCache::new(config),
        }
    }

    /// Track surface for the given inputs.
    pub fn render(&mut self, size: Size, corner_radius: f32, color: Color) -> Arc<Surface> {
        let key = SurfaceKey::new(size, corner_radius, color);
        self.cache
            .get_or_render(key, || rasterize_track(size, corner_radius, color))
    }

    /// Cache statistics.
    #[must_use]
    pub const fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

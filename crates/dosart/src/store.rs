#![forbid(unsafe_code)]

//! Texture store abstraction.
//!
//! The renderer's only side effect is registering a finished surface
//! under a string key. That sink is a trait so the pipeline can be
//! exercised against an in-memory store with no rendering host present;
//! production hosts implement it over their own texture registry.

use std::collections::HashMap;
use std::sync::Mutex;

use dosart_raster::PixelSurface;

/// A named bitmap registry the renderer publishes into.
///
/// Methods take `&self`: implementations are expected to provide their
/// own interior mutability so independent render calls can run from
/// parallel workers.
pub trait TextureStore {
    /// Whether a texture is registered under `key`.
    fn contains(&self, key: &str) -> bool;

    /// Remove the texture under `key`. Returns whether one existed.
    fn remove(&self, key: &str) -> bool;

    /// Register `surface` under `key`.
    fn insert(&self, key: &str, surface: PixelSurface);

    /// Replace whatever is under `key` with `surface`.
    ///
    /// The default implementation is the plain exists/remove/insert
    /// sequence and is *not* atomic across the three calls. Stores used
    /// from parallel workers should override it to hold their lock for
    /// the whole sequence.
    fn replace(&self, key: &str, surface: PixelSurface) {
        if self.contains(key) {
            self.remove(key);
        }
        self.insert(key, surface);
    }
}

/// In-memory texture store over a mutex-guarded map.
///
/// Suitable both as the test double for the pipeline and as a real sink
/// for hosts that consume surfaces by lookup.
#[derive(Debug, Default)]
pub struct MemoryTextureStore {
    textures: Mutex<HashMap<String, PixelSurface>>,
}

impl MemoryTextureStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clone of the texture under `key`, if registered.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<PixelSurface> {
        self.lock().get(key).cloned()
    }

    /// Number of registered textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no textures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, PixelSurface>> {
        self.textures.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TextureStore for MemoryTextureStore {
    fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    fn insert(&self, key: &str, surface: PixelSurface) {
        self.lock().insert(key.to_owned(), surface);
    }

    fn replace(&self, key: &str, surface: PixelSurface) {
        // One lock for the whole exists/remove/insert critical section.
        self.lock().insert(key.to_owned(), surface);
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryTextureStore, TextureStore};
    use dosart_raster::{PackedRgba, PixelSurface};

    fn surface(w: u32, h: u32, color: PackedRgba) -> PixelSurface {
        let mut s = PixelSurface::new(w, h);
        s.fill_rect(0, 0, w, h, color);
        s
    }

    #[test]
    fn starts_empty() {
        let store = MemoryTextureStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.contains("wall"));
        assert_eq!(store.get("wall"), None);
    }

    #[test]
    fn insert_then_lookup() {
        let store = MemoryTextureStore::new();
        let tex = surface(4, 4, PackedRgba::rgb(255, 0, 0));
        store.insert("wall", tex.clone());
        assert!(store.contains("wall"));
        assert_eq!(store.get("wall"), Some(tex));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let store = MemoryTextureStore::new();
        store.insert("wall", surface(2, 2, PackedRgba::rgb(0, 255, 0)));
        assert!(store.remove("wall"));
        assert!(!store.remove("wall"));
        assert!(store.is_empty());
    }

    #[test]
    fn replace_swaps_the_surface() {
        let store = MemoryTextureStore::new();
        let first = surface(2, 2, PackedRgba::rgb(1, 1, 1));
        let second = surface(8, 8, PackedRgba::rgb(2, 2, 2));
        store.replace("wall", first);
        store.replace("wall", second.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("wall"), Some(second));
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let store = MemoryTextureStore::new();
        store.insert("a", surface(1, 1, PackedRgba::rgb(1, 0, 0)));
        store.insert("b", surface(1, 1, PackedRgba::rgb(0, 1, 0)));
        assert_eq!(store.len(), 2);
        assert!(store.remove("a"));
        assert!(store.contains("b"));
    }

    #[test]
    fn concurrent_replace_on_distinct_keys() {
        use std::sync::Arc;

        let store = Arc::new(MemoryTextureStore::new());
        let mut handles = Vec::new();
        for worker in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let key = format!("tex-{worker}");
                for round in 0..50u8 {
                    let color = PackedRgba::rgb(worker as u8, round, 0);
                    store.replace(&key, surface(2, 2, color));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
        for worker in 0..8 {
            let tex = store.get(&format!("tex-{worker}")).unwrap();
            assert_eq!(tex.get(0, 0), Some(PackedRgba::rgb(worker as u8, 49, 0)));
        }
    }
}

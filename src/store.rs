use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;

/// The three mappings that make up the shortener's state.
///
/// Forward and reverse entries are always written together, and the domain
/// counter is bumped in the same critical section, so readers never see a
/// forward entry without its matching reverse entry.
#[derive(Debug, Default)]
pub struct StoreInner {
    /// original URL → short code
    pub url_to_short: HashMap<String, String>,
    /// short code → original URL
    pub short_to_url: HashMap<String, String>,
    /// normalized hostname → number of distinct URLs shortened under it
    pub domain_hits: HashMap<String, u64>,
}

/// Thread-safe in-memory store for all shortener state.
///
/// A single RwLock covers all three maps jointly: writes need cross-map
/// atomicity (forward + reverse + counter as one unit), so per-map locking
/// would not be enough. Guards are scoped and release on every exit path,
/// including unwinds.
///
/// Constructed once at startup and shared by reference; entries are only
/// ever added, never updated or removed, and live for the process lifetime.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared read access to the maps. Multiple readers may hold this
    /// concurrently; none proceed while a writer is active.
    pub fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read()
    }

    /// Exclusive write access to the maps.
    pub fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        let inner = store.read();
        assert!(inner.url_to_short.is_empty());
        assert!(inner.short_to_url.is_empty());
        assert!(inner.domain_hits.is_empty());
    }

    #[test]
    fn concurrent_writers_lose_no_updates() {
        let store = Arc::new(Store::new());
        let threads = 100;

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let original = format!("https://example.com/{i}");
                    let short = format!("code{i:03}");

                    {
                        let mut inner = store.write();
                        inner.url_to_short.insert(original.clone(), short.clone());
                        inner.short_to_url.insert(short.clone(), original.clone());
                        *inner.domain_hits.entry("example.com".to_owned()).or_insert(0) += 1;
                    }

                    let inner = store.read();
                    assert_eq!(inner.url_to_short.get(&original), Some(&short));
                    assert_eq!(inner.short_to_url.get(&short), Some(&original));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let inner = store.read();
        assert_eq!(inner.url_to_short.len(), threads);
        assert_eq!(inner.short_to_url.len(), threads);
        assert_eq!(inner.domain_hits["example.com"], threads as u64);
    }

    #[test]
    fn readers_always_see_matched_pairs() {
        let store = Arc::new(Store::new());

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    let original = format!("https://example.com/{i}");
                    let short = format!("c{i:05}");
                    let mut inner = store.write();
                    inner.url_to_short.insert(original.clone(), short.clone());
                    inner.short_to_url.insert(short, original);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let inner = store.read();
                        // Every forward entry must have its reverse twin.
                        for (original, short) in &inner.url_to_short {
                            assert_eq!(inner.short_to_url.get(short), Some(original));
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}

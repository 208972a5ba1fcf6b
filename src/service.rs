use crate::store::Store;
use md5::{Digest, Md5};
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Length of a generated short code, in hex characters.
const SHORT_CODE_LEN: usize = 6;

/// Business logic layer over the [`Store`].
///
/// Short codes are derived deterministically: the first 6 lowercase-hex
/// characters of the MD5 digest of the original URL. Deterministic but not
/// collision-free — two distinct URLs whose digest prefixes coincide will
/// silently alias to the same code, and the later reverse entry wins. This
/// is an accepted limitation, not corrected here.
#[derive(Debug, Clone)]
pub struct UrlService {
    store: Arc<Store>,
}

impl UrlService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Shorten a URL, returning its 6-character code.
    ///
    /// Idempotent: a URL that has already been shortened gets its existing
    /// code back, with no counter increment and no domain re-derivation.
    /// Empty input is rejected before any mutation and returns `None`.
    ///
    /// The forward insert, reverse insert and domain counter increment all
    /// happen under one write lock, so no reader ever observes a partially
    /// updated triple.
    pub fn shorten(&self, original: &str) -> Option<String> {
        if original.is_empty() {
            return None;
        }

        let mut inner = self.store.write();

        if let Some(short) = inner.url_to_short.get(original) {
            return Some(short.clone());
        }

        let short = derive_code(original);

        inner
            .url_to_short
            .insert(original.to_owned(), short.clone());
        inner
            .short_to_url
            .insert(short.clone(), original.to_owned());

        let domain = extract_domain(original);
        *inner.domain_hits.entry(domain).or_insert(0) += 1;

        Some(short)
    }

    /// Look up the original URL for a short code. No side effects.
    pub fn resolve(&self, short: &str) -> Option<String> {
        self.store.read().short_to_url.get(short).cloned()
    }

    /// Return a copy of the full domain → hit count map.
    ///
    /// The limit is accepted for interface compatibility but not applied
    /// here: callers own the sort order and the truncation. Downstream code
    /// relies on receiving the complete map.
    pub fn top_domains(&self, _limit: usize) -> HashMap<String, u64> {
        self.store.read().domain_hits.clone()
    }
}

/// First 6 hex characters of the MD5 digest of the URL text.
fn derive_code(original: &str) -> String {
    let digest = Md5::digest(original.as_bytes());
    hex::encode(digest)[..SHORT_CODE_LEN].to_owned()
}

/// Extract the hostname for the hit counter, stripping a leading "www.".
///
/// Input that fails to parse as an absolute URL (or has no host) yields the
/// empty string, which is still counted under the empty key.
fn extract_domain(original: &str) -> String {
    let host = Url::parse(original)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_default();

    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_owned(),
        None => host,
    }
}

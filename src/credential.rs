//! Cacheable default-credential handles
//!
//! Building a default credential chain is expensive, so call sites that ask
//! for "the default credential with these arguments" should share one
//! instance. The handle's identity is computed once at construction from the
//! full argument set (positional and keyword), and equality and hashing both
//! derive from that precomputed key so they always agree.

use std::collections::{BTreeMap, HashMap};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

/// Cache-friendly handle for a default-credential-chain request
#[derive(Debug, Clone)]
pub struct CacheableCredential {
    args: Vec<String>,
    options: BTreeMap<String, String>,
    identity: u64,
}

impl CacheableCredential {
    /// Create a handle from positional arguments and keyword options.
    ///
    /// Keyword options are held sorted by key, so two handles built from the
    /// same set of options compare equal regardless of insertion order.
    pub fn new<A, K, V>(args: A, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let options: BTreeMap<String, String> = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut hasher = DefaultHasher::new();
        args.hash(&mut hasher);
        options.hash(&mut hasher);
        let identity = hasher.finish();

        Self {
            args,
            options,
            identity,
        }
    }

    /// Positional construction arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Keyword construction options, sorted by key
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Return the process-wide shared instance for this argument set.
    ///
    /// The first request for a given argument set caches the handle; later
    /// requests with an equal argument set get the same `Arc`.
    pub fn shared(self) -> Arc<Self> {
        static CACHE: OnceLock<RwLock<HashMap<u64, Arc<CacheableCredential>>>> = OnceLock::new();

        let cache = CACHE.get_or_init(|| RwLock::new(HashMap::new()));
        if let Some(existing) = cache.read().get(&self.identity) {
            return existing.clone();
        }

        let identity = self.identity;
        let mut guard = cache.write();
        guard
            .entry(identity)
            .or_insert_with(|| {
                debug!(identity, "caching new default credential handle");
                Arc::new(self)
            })
            .clone()
    }
}

impl PartialEq for CacheableCredential {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for CacheableCredential {}

impl Hash for CacheableCredential {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity);
    }
}

//! Content provider trait and the non-HTTP implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::cache::ContentCache;
use crate::error::FetchError;

/// Source of reference content for a topic.
///
/// `Ok(None)` means the provider has nothing for this topic; the analysis
/// degrades that topic to insufficient-content instead of failing the run.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, topic: &str) -> Result<Option<String>, FetchError>;
}

/// Serves pre-fetched `.txt` files from a directory.
///
/// File names are the topic label with path-hostile characters flattened:
/// lowercase, alphanumerics kept, everything else collapsed to single
/// underscores. Used for offline runs and tests.
#[derive(Debug, Clone)]
pub struct DirContentProvider {
    dir: PathBuf,
}

impl DirContentProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File name a topic maps to.
    pub fn file_name(topic: &str) -> String {
        let mut name = String::with_capacity(topic.len());
        let mut last_was_sep = true;
        for c in topic.chars() {
            if c.is_alphanumeric() {
                name.extend(c.to_lowercase());
                last_was_sep = false;
            } else if !last_was_sep {
                name.push('_');
                last_was_sep = true;
            }
        }
        while name.ends_with('_') {
            name.pop();
        }
        name.push_str(".txt");
        name
    }
}

#[async_trait]
impl ContentProvider for DirContentProvider {
    async fn fetch(&self, topic: &str) -> Result<Option<String>, FetchError> {
        let path = self.dir.join(Self::file_name(topic));
        if !path.exists() {
            debug!(topic = topic, path = %path.display(), "No local content file");
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|source| FetchError::Io { path, source })?;
        Ok(Some(text))
    }
}

/// Cache-first wrapper around any provider.
///
/// Hits never touch the inner provider; misses that return content are
/// stored before being returned, misses that return nothing are not cached
/// so a later run can retry.
pub struct CachedProvider<P> {
    inner: P,
    cache: ContentCache,
}

impl<P: ContentProvider> CachedProvider<P> {
    pub fn new(inner: P, cache: ContentCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for CachedProvider<P> {
    async fn fetch(&self, topic: &str) -> Result<Option<String>, FetchError> {
        if let Some(hit) = self.cache.get(topic)? {
            debug!(topic = topic, "Content cache hit");
            return Ok(Some(hit));
        }
        let fetched = self.inner.fetch(topic).await?;
        if let Some(content) = &fetched {
            self.cache.put(topic, content)?;
        }
        Ok(fetched)
    }
}

//! Content-addressed disk cache.
//!
//! One file per topic, named by the SHA-256 of the topic string, so
//! arbitrary topic labels (slashes, unicode, length) never produce invalid
//! paths and renaming a topic never aliases another's content.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::FetchError;

/// Disk cache mapping topic labels to fetched content.
#[derive(Debug, Clone)]
pub struct ContentCache {
    dir: PathBuf,
}

impl ContentCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache under the platform cache directory.
    pub fn default_location() -> Result<Self, FetchError> {
        let base = dirs::cache_dir().ok_or(FetchError::NoCacheDir)?;
        Ok(Self::new(base.join("studygraph").join("content")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, topic: &str) -> PathBuf {
        let digest = Sha256::digest(topic.as_bytes());
        self.dir.join(format!("{digest:x}.txt"))
    }

    /// Whether content for this topic is cached.
    pub fn contains(&self, topic: &str) -> bool {
        self.path_for(topic).exists()
    }

    /// Read cached content, if any.
    pub fn get(&self, topic: &str) -> Result<Option<String>, FetchError> {
        let path = self.path_for(topic);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })?;
        Ok(Some(text))
    }

    /// Store content for a topic, overwriting any previous entry.
    ///
    /// Writes go to a sibling temp file first and are renamed into place, so
    /// readers never observe a half-written entry.
    pub fn put(&self, topic: &str, content: &str) -> Result<(), FetchError> {
        fs::create_dir_all(&self.dir).map_err(|source| FetchError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(topic);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, content).map_err(|source| FetchError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(topic = topic, path = %path.display(), "Cached content");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_miss_then_hit() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::new(dir.path());

        assert!(cache.get("Sorting Algorithms").unwrap().is_none());
        cache.put("Sorting Algorithms", "the notes").unwrap();
        assert!(cache.contains("Sorting Algorithms"));
        assert_eq!(
            cache.get("Sorting Algorithms").unwrap().as_deref(),
            Some("the notes")
        );
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::new(dir.path());

        cache.put("topic", "first").unwrap();
        cache.put("topic", "second").unwrap();
        assert_eq!(cache.get("topic").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_topics_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::new(dir.path());

        cache.put("Graphs", "graph notes").unwrap();
        cache.put("Trees", "tree notes").unwrap();
        assert_eq!(cache.get("Graphs").unwrap().as_deref(), Some("graph notes"));
        assert_eq!(cache.get("Trees").unwrap().as_deref(), Some("tree notes"));
    }

    #[test]
    fn test_awkward_topic_labels_are_safe() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::new(dir.path());

        let topic = "I/O Scheduling: 100% coverage?";
        cache.put(topic, "notes").unwrap();
        assert_eq!(cache.get(topic).unwrap().as_deref(), Some("notes"));
    }

    #[test]
    fn test_no_stray_temp_files() {
        let dir = TempDir::new().unwrap();
        let cache = ContentCache::new(dir.path());
        cache.put("topic", "content").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with(".txt"));
    }
}

//! # study-fetch
//!
//! Reference content acquisition: a `ContentProvider` trait with HTTP,
//! directory, and caching implementations, plus the content-addressed disk
//! cache itself. Absence of content is a legitimate outcome everywhere in
//! this crate; only I/O and transport failures are errors.

pub mod cache;
pub mod error;
pub mod http;
pub mod provider;
pub mod query;

pub use cache::ContentCache;
pub use error::FetchError;
pub use http::{FetchConfig, HttpContentFetcher};
pub use provider::{CachedProvider, ContentProvider, DirContentProvider};
pub use query::clean_topic_query;

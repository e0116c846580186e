//! HTTP content fetching and HTML text extraction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::provider::ContentProvider;
use crate::query::clean_topic_query;

/// HTTP fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL template; `{query}` is replaced with the encoded topic query
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Extracted text below this length is discarded as a junk page
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,

    /// Domains never fetched (video and Q&A sites scrape to noise)
    #[serde(default = "default_skip_domains")]
    pub skip_domains: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            min_content_chars: default_min_content_chars(),
            skip_domains: default_skip_domains(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url_template() -> String {
    "https://en.wikipedia.org/wiki/{query}".to_string()
}
fn default_min_content_chars() -> usize {
    500
}
fn default_skip_domains() -> Vec<String> {
    ["youtube.com", "facebook.com", "quora.com", "reddit.com"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_timeout_secs() -> u64 {
    20
}

/// Fetches reference content over HTTP and strips it to plain text.
pub struct HttpContentFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpContentFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("studygraph/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn url_for(&self, query: &str) -> Result<Url, FetchError> {
        let raw = self
            .config
            .url_template
            .replace("{query}", &encode_query(query));
        Url::parse(&raw).map_err(|_| FetchError::InvalidUrl(raw))
    }

    fn skipped(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return true;
        };
        self.config
            .skip_domains
            .iter()
            .any(|d| host == d || host.ends_with(&format!(".{d}")))
    }
}

#[async_trait]
impl ContentProvider for HttpContentFetcher {
    async fn fetch(&self, topic: &str) -> Result<Option<String>, FetchError> {
        let query = clean_topic_query(topic);
        if query.is_empty() {
            debug!(topic = topic, "Topic cleans to an empty query");
            return Ok(None);
        }

        let url = self.url_for(&query)?;
        if self.skipped(&url) {
            debug!(url = %url, "Domain on skip list");
            return Ok(None);
        }

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            debug!(url = %url, status = %response.status(), "Non-success response");
            return Ok(None);
        }
        let html = response.text().await?;

        let text = extract_text(&html);
        if text.chars().count() < self.config.min_content_chars {
            debug!(
                topic = topic,
                chars = text.chars().count(),
                "Extracted text too short, discarding"
            );
            return Ok(None);
        }

        info!(topic = topic, chars = text.chars().count(), "Fetched content");
        Ok(Some(text))
    }
}

/// Extract readable text: paragraph contents only, scripts and chrome
/// excluded by construction.
fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p").expect("static selector");

    let mut out = String::new();
    for element in document.select(&paragraphs) {
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&text);
        }
    }
    out
}

/// Percent-encode a query for URL substitution.
fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

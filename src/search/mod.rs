//! Scryfall card search with pagination.
//!
//! This module owns the remote side of an export: building the search URL,
//! decoding response pages, and following `next_page` until the server says
//! there is nothing left. The HTTP transport sits behind [`PageSource`] so the
//! pagination loop can run against canned pages in tests.

pub mod http;

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::ScrycsvError;

pub use http::HttpPageSource;

/// Default Scryfall search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.scryfall.com/cards/search";

/// A single card as returned by the API.
///
/// Fields are kept untyped; key order follows the response.
pub type CardRecord = Map<String, Value>;

/// One page of a paginated search response.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchPage {
    pub total_cards: u64,
    #[serde(default)]
    pub data: Vec<CardRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl SearchPage {
    /// Decodes a page from raw response bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// All records of a search, in API order.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    /// Count reported by the server on the first page.
    pub total_cards: u64,
    /// Number of pages fetched.
    pub pages: usize,
    pub records: Vec<CardRecord>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the accumulated count equals the server-reported total.
    pub fn is_complete(&self) -> bool {
        self.records.len() as u64 == self.total_cards
    }
}

/// Something that can fetch one search page by absolute URL.
pub trait PageSource {
    fn fetch_page(&mut self, url: &str) -> Result<SearchPage, ScrycsvError>;
}

/// Observer for fetch progress.
///
/// Every method has an empty default so implementors only override what they
/// care about.
pub trait FetchProgress {
    fn request_issued(&mut self, _url: &str) {}
    fn search_started(&mut self, _total: u64) {}
    fn page_received(&mut self, _downloaded: usize, _total: u64) {}
}

/// Discards all progress notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl FetchProgress for NoProgress {}

/// Reports progress as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl FetchProgress for LogProgress {
    fn request_issued(&mut self, url: &str) {
        tracing::info!("Requesting '{}'...", url);
    }

    fn search_started(&mut self, total: u64) {
        tracing::info!(
            "The search has produced {} results. Proceeding to download...",
            total
        );
    }

    fn page_received(&mut self, downloaded: usize, total: u64) {
        tracing::info!("Downloaded {}/{} results...", downloaded, total);
    }
}

/// Builds the first-page URL for a search query.
///
/// The query is passed through verbatim and form-encoded into `q`.
pub fn build_search_url(endpoint: &str, query: &str) -> Result<Url, ScrycsvError> {
    let mut url = Url::parse(endpoint).map_err(|source| ScrycsvError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;

    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("pretty", "true");

    Ok(url)
}

/// Runs a search and follows pagination until the server reports no more pages.
///
/// Any failed page aborts the whole search; nothing is returned for the pages
/// already downloaded. There is no page cap: a server that never clears
/// `has_more` keeps this looping.
pub fn fetch_all<S>(
    source: &mut S,
    endpoint: &str,
    query: &str,
    progress: &mut dyn FetchProgress,
) -> Result<ResultSet, ScrycsvError>
where
    S: PageSource + ?Sized,
{
    let first_url = build_search_url(endpoint, query)?;
    let mut url = first_url.to_string();

    progress.request_issued(&url);
    let mut page = source.fetch_page(&url)?;

    let total_cards = page.total_cards;
    progress.search_started(total_cards);

    let mut result = ResultSet {
        total_cards,
        pages: 1,
        records: std::mem::take(&mut page.data),
    };
    progress.page_received(result.records.len(), total_cards);

    while page.has_more {
        let next = page
            .next_page
            .take()
            .ok_or_else(|| ScrycsvError::MissingNextPage { url: url.clone() })?;
        url = next;

        progress.request_issued(&url);
        page = source.fetch_page(&url)?;

        result.records.append(&mut page.data);
        result.pages += 1;
        progress.page_received(result.records.len(), total_cards);
    }

    if !result.is_complete() {
        tracing::warn!(
            "Search reported {} results but {} were downloaded",
            total_cards,
            result.records.len()
        );
    }

    Ok(result)
}

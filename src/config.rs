//! Search configuration
//!
//! `SearchConfig` is built once at startup and shared read-only with every
//! page task. Nothing in the crate reads option state from anywhere else.

use crate::error::{Error, Result};
use crate::output::OutputOptions;
use crate::types::{
    FileType, ImageColor, ImageScale, ImageSize, ImageType, LineFormat, OptionStringExt,
    SafeSearch,
};
use std::time::Duration;
use url::Url;

/// Default search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Default maximum result index
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Image Filters
// ============================================================================

/// Image-search sub-filters
///
/// Present on a `SearchConfig` only when image search is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageFilters {
    pub image_type: Option<ImageType>,
    pub size: Option<ImageSize>,
    pub color: Option<ImageColor>,
    pub scale: Option<ImageScale>,
}

// ============================================================================
// Search Config
// ============================================================================

/// Immutable configuration for one search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Free-text query terms
    pub terms: Vec<String>,
    /// Largest result offset to request
    pub max_results: u32,
    /// Safe-search level
    pub safe: SafeSearch,
    /// Image search filters (`None` = web search)
    pub image: Option<ImageFilters>,
    /// File-type restriction
    pub file_type: Option<FileType>,
    /// Phrase every result must contain
    pub exact: Option<String>,
    /// Phrase no result may contain
    pub exclude: Option<String>,
    /// Restrict results to this site
    pub site: Option<String>,
    /// Output formatting options
    pub output: OutputOptions,
    /// Search endpoint
    pub endpoint: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl SearchConfig {
    /// Create a new config builder
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Whether this is an image search
    pub fn is_image_search(&self) -> bool {
        self.image.is_some()
    }

    /// Query terms joined into a single query string
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }
}

/// Builder for `SearchConfig`
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    terms: Vec<String>,
    max_results: u32,
    safe: SafeSearch,
    image_search: bool,
    image: ImageFilters,
    file_type: Option<FileType>,
    exact: Option<String>,
    exclude: Option<String>,
    site: Option<String>,
    include_snippet: bool,
    thumbnails: bool,
    format: LineFormat,
    endpoint: String,
    timeout: Duration,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
            safe: SafeSearch::default(),
            image_search: false,
            image: ImageFilters::default(),
            file_type: None,
            exact: None,
            exclude: None,
            site: None,
            include_snippet: false,
            thumbnails: false,
            format: LineFormat::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SearchConfigBuilder {
    /// Set the query terms
    #[must_use]
    pub fn terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum result index
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the safe-search level
    #[must_use]
    pub fn safe(mut self, safe: SafeSearch) -> Self {
        self.safe = safe;
        self
    }

    /// Enable or disable image search
    #[must_use]
    pub fn image_search(mut self, enabled: bool) -> Self {
        self.image_search = enabled;
        self
    }

    /// Set image filters (only used when image search is enabled)
    #[must_use]
    pub fn image_filters(mut self, filters: ImageFilters) -> Self {
        self.image = filters;
        self
    }

    /// Restrict results to a file type
    #[must_use]
    pub fn file_type(mut self, file_type: Option<FileType>) -> Self {
        self.file_type = file_type;
        self
    }

    /// Require an exact phrase
    #[must_use]
    pub fn exact(mut self, phrase: Option<String>) -> Self {
        self.exact = phrase;
        self
    }

    /// Exclude a phrase
    #[must_use]
    pub fn exclude(mut self, phrase: Option<String>) -> Self {
        self.exclude = phrase;
        self
    }

    /// Restrict results to a site
    #[must_use]
    pub fn site(mut self, site: Option<String>) -> Self {
        self.site = site;
        self
    }

    /// Include result snippets in the output
    #[must_use]
    pub fn include_snippet(mut self, enabled: bool) -> Self {
        self.include_snippet = enabled;
        self
    }

    /// Include image links even outside image search
    #[must_use]
    pub fn thumbnails(mut self, enabled: bool) -> Self {
        self.thumbnails = enabled;
        self
    }

    /// Set the line format
    #[must_use]
    pub fn format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the search endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<SearchConfig> {
        let terms: Vec<String> = self
            .terms
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(Error::missing_field("query terms"));
        }

        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }

        let image = self.image_search.then_some(self.image);
        let output = OutputOptions {
            include_snippet: self.include_snippet,
            include_image_links: self.thumbnails || image.is_some(),
            format: self.format,
        };

        Ok(SearchConfig {
            terms,
            max_results: self.max_results,
            safe: self.safe,
            image,
            file_type: self.file_type,
            exact: self.exact.none_if_empty(),
            exclude: self.exclude.none_if_empty(),
            site: self.site.none_if_empty(),
            output,
            endpoint,
            timeout: self.timeout,
        })
    }
}

//! CLI arguments and parsing

use crate::config::{ImageFilters, SearchConfig, DEFAULT_ENDPOINT, DEFAULT_MAX_RESULTS};
use crate::error::Result;
use crate::types::{FileType, ImageColor, ImageScale, ImageSize, ImageType, LineFormat, SafeSearch};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line custom search
#[derive(Parser, Debug)]
#[command(name = "gcli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query terms
    #[arg(required = true, value_name = "TERMS")]
    pub terms: Vec<String>,

    /// Maximum result index; pages start at 0, 10, 20, ... up to this value
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Image search
    #[arg(short, long)]
    pub image: bool,

    /// Image type (image search only)
    #[arg(long, value_enum)]
    pub image_type: Option<ImageType>,

    /// Image size (image search only)
    #[arg(long, value_enum)]
    pub image_size: Option<ImageSize>,

    /// Dominant image color (image search only)
    #[arg(long, value_enum)]
    pub image_color: Option<ImageColor>,

    /// Image color scale (image search only)
    #[arg(long, value_enum)]
    pub image_scale: Option<ImageScale>,

    /// Restrict results to a file type
    #[arg(short, long, value_enum)]
    pub file_type: Option<FileType>,

    /// Phrase every result must contain
    #[arg(short, long, value_name = "PHRASE")]
    pub exact: Option<String>,

    /// Phrase no result may contain
    #[arg(short = 'x', long, value_name = "PHRASE")]
    pub exclude: Option<String>,

    /// Restrict results to a site
    #[arg(short = 'u', long, value_name = "URL")]
    pub site: Option<String>,

    /// Safe-search level
    #[arg(short, long, value_enum, default_value_t = SafeSearch::Off)]
    pub safe: SafeSearch,

    /// Append result snippets
    #[arg(short = 'n', long)]
    pub snippet: bool,

    /// Append image context and thumbnail links
    #[arg(short, long)]
    pub thumbnails: bool,

    /// Line format
    #[arg(long, value_enum, default_value_t = LineFormat::Text)]
    pub format: LineFormat,

    /// Credentials file (YAML with `api_key` and `cx`)
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Search endpoint
    #[arg(long, env = "GCLI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Exit with status 2 if any page failed
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    pub fn search_config(&self) -> Result<SearchConfig> {
        SearchConfig::builder()
            .terms(self.terms.iter().cloned())
            .max_results(self.max_results)
            .safe(self.safe)
            .image_search(self.image)
            .image_filters(ImageFilters {
                image_type: self.image_type,
                size: self.image_size,
                color: self.image_color,
                scale: self.image_scale,
            })
            .file_type(self.file_type)
            .exact(self.exact.clone())
            .exclude(self.exclude.clone())
            .site(self.site.clone())
            .include_snippet(self.snippet)
            .thumbnails(self.thumbnails)
            .format(self.format)
            .endpoint(self.endpoint.clone())
            .timeout(Duration::from_secs(self.timeout))
            .build()
    }
}

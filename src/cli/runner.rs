//! CLI runner - resolves credentials, runs the search, picks the exit status

use crate::cli::commands::Cli;
use crate::config::SearchConfig;
use crate::credentials::{ChainedCredentials, Credentials, EnvCredentials, FileCredentials};
use crate::engine::{RunSummary, SearchEngine};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::WriterSink;
use crate::query::RequestTemplate;
use crate::search::HttpPageFetcher;
use std::io::{self, BufWriter};
use std::sync::Arc;
use tracing::{debug, warn};

/// Exit status when every page succeeded, or `--strict` is off
pub const EXIT_OK: i32 = 0;

/// Exit status for setup errors
pub const EXIT_SETUP_ERROR: i32 = 1;

/// Exit status under `--strict` when at least one page failed
pub const EXIT_PAGES_FAILED: i32 = 2;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the search and return the process exit status.
    ///
    /// Errors returned here are setup errors or output failures; page
    /// failures only influence the status.
    pub async fn run(&self) -> Result<i32> {
        let config = Arc::new(self.cli.search_config()?);
        let credentials = self.credentials()?;
        let engine = self.engine(Arc::clone(&config), &credentials)?;

        let sink = WriterSink::new(BufWriter::new(io::stdout()));
        let summary = match engine.run(sink).await {
            Ok(outcome) => outcome.summary,
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("Output closed early");
                return Ok(EXIT_OK);
            }
            Err(e) => return Err(e),
        };

        if summary.is_total_failure() {
            warn!(
                "All {} pages failed; no results were written",
                summary.pages_requested
            );
        }
        Ok(self.exit_status(&summary))
    }

    /// Resolve credentials: the `--credentials` file first, then the environment
    fn credentials(&self) -> Result<Credentials> {
        let mut chain = ChainedCredentials::new();
        if let Some(path) = &self.cli.credentials {
            chain = chain.with(FileCredentials::new(path));
        }
        chain.with(EnvCredentials::with_dotenv()).resolve()
    }

    fn engine(&self, config: Arc<SearchConfig>, credentials: &Credentials) -> Result<SearchEngine> {
        let client = HttpClient::with_config(
            HttpClientConfig::builder().timeout(config.timeout).build(),
        )?;
        let template = RequestTemplate::new(&config, credentials);
        debug!("Searching for '{}' via {}", config.query(), config.endpoint);

        Ok(SearchEngine::new(
            config,
            template,
            Arc::new(HttpPageFetcher::new(client)),
        ))
    }

    /// Exit status for a finished run
    pub fn exit_status(&self, summary: &RunSummary) -> i32 {
        if self.cli.strict && !summary.is_complete() {
            EXIT_PAGES_FAILED
        } else {
            EXIT_OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PageFailure;
    use clap::Parser;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["gcli"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    fn summary_with_failure() -> RunSummary {
        let mut summary = RunSummary::new(2);
        summary.add_page(3);
        summary.add_failure(PageFailure::new(10, Error::Timeout { timeout_ms: 10 }));
        summary
    }

    #[test]
    fn test_exit_status_lenient() {
        let runner = runner(&["rust"]);
        assert_eq!(runner.exit_status(&summary_with_failure()), EXIT_OK);
        assert_eq!(runner.exit_status(&RunSummary::new(1)), EXIT_OK);
    }

    #[test]
    fn test_exit_status_strict() {
        let runner = runner(&["--strict", "rust"]);
        assert_eq!(runner.exit_status(&summary_with_failure()), EXIT_PAGES_FAILED);

        let mut complete = RunSummary::new(1);
        complete.add_page(10);
        assert_eq!(runner.exit_status(&complete), EXIT_OK);
    }

    #[test]
    fn test_credentials_from_missing_file() {
        let runner = runner(&["--credentials", "/nonexistent/gcli.yaml", "rust"]);
        let err = runner.credentials().unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(err.is_setup_error());
    }

    #[test]
    fn test_credentials_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creds.yaml");
        std::fs::write(&path, "api_key: file-key\ncx: file-cx\n").unwrap();

        let runner = runner(&["--credentials", path.to_str().unwrap(), "rust"]);
        let creds = runner.credentials().unwrap();
        assert_eq!(creds, Credentials::new("file-key", "file-cx"));
    }

    #[test]
    fn test_related_site_flag_is_not_offered() {
        assert!(Cli::try_parse_from(["gcli", "-r", "https://example.org", "rust"]).is_err());
        assert!(Cli::try_parse_from(["gcli", "--related", "https://example.org", "rust"]).is_err());
    }

    #[tokio::test]
    async fn test_invalid_endpoint_fails_before_credentials() {
        let runner = runner(&["--endpoint", "ftp://example.com", "rust"]);
        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "endpoint"));
    }
}

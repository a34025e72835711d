//! Credential providers

use super::types::{Credentials, CredentialsFile};
use crate::error::{Error, Result, ResultExt};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GCLI_API_KEY";

/// Environment variable holding the search-scope identifier
pub const SCOPE_ID_VAR: &str = "GCLI_CX";

/// A source of credentials
pub trait CredentialProvider: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Look up credentials.
    ///
    /// `Ok(None)` means this source has nothing configured and the next
    /// source may be tried; `Err` means it is configured but unusable.
    fn credentials(&self) -> Result<Option<Credentials>>;
}

// ============================================================================
// Environment
// ============================================================================

/// Credentials from `GCLI_API_KEY` and `GCLI_CX`
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials {
    /// Fixed variable set; `None` reads the process environment
    vars: Option<HashMap<String, String>>,
}

impl EnvCredentials {
    /// Read from the process environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from the process environment after loading `.env`, if present
    pub fn with_dotenv() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => debug!("Ignoring unreadable .env file: {e}"),
        }
        Self::new()
    }

    /// Read from a fixed set of variables instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn var(&self, name: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

impl CredentialProvider for EnvCredentials {
    fn name(&self) -> &str {
        "environment"
    }

    fn credentials(&self) -> Result<Option<Credentials>> {
        match (self.var(API_KEY_VAR), self.var(SCOPE_ID_VAR)) {
            (Some(key), Some(cx)) => Ok(Some(Credentials::new(key, cx))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::credentials(format!(
                "{API_KEY_VAR} is set but {SCOPE_ID_VAR} is not"
            ))),
            (None, Some(_)) => Err(Error::credentials(format!(
                "{SCOPE_ID_VAR} is set but {API_KEY_VAR} is not"
            ))),
        }
    }
}

// ============================================================================
// YAML File
// ============================================================================

/// Credentials from a YAML file
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    /// Create a provider for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this provider reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialProvider for FileCredentials {
    fn name(&self) -> &str {
        "file"
    }

    fn credentials(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound {
                path: self.path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let file: CredentialsFile = serde_yaml::from_str(&content)?;

        let api_key = file.api_key.trim();
        let cx = file.cx.trim();
        if api_key.is_empty() {
            return Err(Error::credentials(format!(
                "{}: api_key is empty",
                self.path.display()
            )));
        }
        if cx.is_empty() {
            return Err(Error::credentials(format!(
                "{}: cx is empty",
                self.path.display()
            )));
        }

        Ok(Some(Credentials::new(api_key, cx)))
    }
}

// ============================================================================
// Chain
// ============================================================================

/// Tries each provider in order; the first one that yields credentials wins
#[derive(Default)]
pub struct ChainedCredentials {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainedCredentials {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider
    #[must_use]
    pub fn with(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Resolve credentials or fail with a setup error
    pub fn resolve(&self) -> Result<Credentials> {
        self.credentials()?.ok_or_else(|| {
            Error::credentials(format!(
                "no credentials found; set {API_KEY_VAR} and {SCOPE_ID_VAR} or pass --credentials"
            ))
        })
    }
}

impl CredentialProvider for ChainedCredentials {
    fn name(&self) -> &str {
        "chain"
    }

    fn credentials(&self) -> Result<Option<Credentials>> {
        for provider in &self.providers {
            if let Some(creds) = provider.credentials()? {
                debug!("Using credentials from {}", provider.name());
                return Ok(Some(creds));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for ChainedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ChainedCredentials")
            .field("providers", &names)
            .finish()
    }
}

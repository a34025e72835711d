//! Credential retrieval
//!
//! Supplies the API key and search-scope identifier a run needs before any
//! page is requested. Failing to find them is a setup error.
//!
//! Sources, in the order the CLI consults them:
//!
//! - a YAML credentials file passed with `--credentials`
//! - `GCLI_API_KEY` / `GCLI_CX` from the environment (or a `.env` file)

mod providers;
mod types;

pub use providers::{
    ChainedCredentials, CredentialProvider, EnvCredentials, FileCredentials, API_KEY_VAR,
    SCOPE_ID_VAR,
};
pub use types::{Credentials, CredentialsFile};

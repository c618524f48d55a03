//! Resolution inputs, outputs, and the error taxonomy.

use alloy::primitives::Address;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::account::{Credential, CredentialError, CredentialSource};
use crate::network::{ActiveNetwork, NetworkError};

/// Partially specified command-line inputs for one resolution.
///
/// `None` always means "inherit from the active network"; an explicit
/// `Some(false)` is never replaced by a default.
#[derive(Default)]
pub struct ResolutionInput {
    /// Configured network name.
    pub network: Option<String>,
    /// RPC URL; takes precedence over `network`.
    pub url: Option<String>,
    /// Fork mode override.
    pub fork: Option<bool>,
    /// Keystore name or path.
    pub account: Option<String>,
    /// Raw private key.
    pub private_key: Option<Zeroizing<String>>,
    /// Keystore password.
    pub password: Option<Zeroizing<String>>,
    /// File holding the keystore password.
    pub password_file_path: Option<PathBuf>,
    /// Confirm before live broadcast.
    pub prompt_live: Option<bool>,
}

impl std::fmt::Debug for ResolutionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |secret: &Option<Zeroizing<String>>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("ResolutionInput")
            .field("network", &self.network)
            .field("url", &self.url)
            .field("fork", &self.fork)
            .field("account", &self.account)
            .field("private_key", &redacted(&self.private_key))
            .field("password", &redacted(&self.password))
            .field("password_file_path", &self.password_file_path)
            .field("prompt_live", &self.prompt_live)
            .finish()
    }
}

/// Identity of the credential that was bound into the environment.
///
/// The signing capability itself moves into the environment at bind time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundCredential {
    pub address: Address,
    pub source: CredentialSource,
}

impl From<&Credential> for BoundCredential {
    fn from(credential: &Credential) -> Self {
        Self {
            address: credential.address(),
            source: credential.source().clone(),
        }
    }
}

/// Fully resolved execution context.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedContext {
    /// The network transactions will run against.
    pub network: ActiveNetwork,
    /// Fork (simulated) or live mode.
    pub fork: bool,
    /// The bound sender, if any credential was requested.
    pub credential: Option<BoundCredential>,
}

/// How a bind finished.
#[derive(Debug)]
#[must_use]
pub enum BindOutcome {
    /// Context resolved and bound into the environment.
    Bound(ResolvedContext),
    /// The user declined live broadcast. Not an error.
    Cancelled,
}

/// Errors that abort context resolution.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Fork mode and an explicit account were both requested.
    #[error("cannot combine fork mode with an explicit account")]
    ConfigurationConflict,

    /// No selector was given and no default network is configured.
    #[error("no active network set; pass --network or --url, or set default_network")]
    NoActiveNetwork,

    /// Network selector could not be activated.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Requested credential could not be unlocked or was ambiguous.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Reading the confirmation response failed.
    #[error("interactive prompt failed: {0}")]
    Interaction(#[from] std::io::Error),
}

impl ContextError {
    /// Whether the caller's inputs are at fault (as opposed to an unlock or I/O failure).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ContextError::ConfigurationConflict
                | ContextError::NoActiveNetwork
                | ContextError::Network(_)
        )
    }
}

/// Result type for context resolution.
pub type ContextResult<T> = Result<T, ContextError>;

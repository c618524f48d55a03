//! Account types and error definitions.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use zeroize::Zeroizing;

/// Where a credential's key material came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialSource {
    /// Decrypted from a keystore file.
    Keystore { path: PathBuf },
    /// Parsed from a raw private key.
    PrivateKey,
}

/// Raw identifying material for one credential.
///
/// Exactly one entry form is used per resolution. The password and
/// password file travel with either form but are only consulted to
/// unlock a keystore.
pub struct CredentialRequest {
    pub kind: RequestKind,
    /// Keystore password. Ignored for a raw private key.
    pub password: Option<Zeroizing<String>>,
    /// File holding the keystore password. Never read for a raw private
    /// key, so an unreadable file only fails keystore unlocks.
    pub password_file: Option<PathBuf>,
}

/// The two entry forms a credential can be requested by.
pub enum RequestKind {
    /// Keystore name (looked up in the keystore directory) or file path.
    Keystore { identifier: String },
    /// Hex-encoded private key, with or without `0x`.
    PrivateKey { key: Zeroizing<String> },
}

impl CredentialRequest {
    pub fn keystore(identifier: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Keystore {
                identifier: identifier.into(),
            },
            password: None,
            password_file: None,
        }
    }

    pub fn private_key(key: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::PrivateKey {
                key: Zeroizing::new(key.into()),
            },
            password: None,
            password_file: None,
        }
    }

    pub fn with_password(mut self, password: Option<Zeroizing<String>>) -> Self {
        self.password = password;
        self
    }

    pub fn with_password_file(mut self, password_file: Option<PathBuf>) -> Self {
        self.password_file = password_file;
        self
    }

    /// Short description safe for logs (never includes key material).
    pub fn describe(&self) -> String {
        match &self.kind {
            RequestKind::Keystore { identifier } => format!("keystore '{}'", identifier),
            RequestKind::PrivateKey { .. } => "private key".to_string(),
        }
    }
}

impl std::fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("kind", &self.describe())
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("password_file", &self.password_file)
            .finish()
    }
}

/// Errors that can occur while materializing a credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Key could not be unlocked: wrong password, missing or malformed
    /// keystore, bad private key, unreadable password file.
    #[error("credential unavailable: {0}")]
    Unavailable(String),

    /// Identifier matched more than one keystore.
    #[error("account '{identifier}' is ambiguous, matches: {}", format_candidates(.candidates))]
    Ambiguous {
        identifier: String,
        candidates: Vec<PathBuf>,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for credential operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

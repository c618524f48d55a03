//! Unlocked signing credentials.
//!
//! # Security
//! - Keys are never logged or serialized
//! - `Debug` shows the address and source only
//! - Key material is dropped (and zeroized by the signer) with the credential

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::path::Path;

use crate::account::types::{CredentialError, CredentialResult, CredentialSource};

/// An address together with the capability to sign for it.
#[derive(Clone)]
pub struct Credential {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// How the key was obtained.
    source: CredentialSource,
}

impl Credential {
    /// Create a credential from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    ///
    /// # Security
    /// The private key is parsed and stored securely. It is never logged.
    pub fn from_private_key(private_key_hex: &str) -> CredentialResult<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| CredentialError::Unavailable(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Private key credential loaded");

        Ok(Self {
            signer,
            source: CredentialSource::PrivateKey,
        })
    }

    /// Decrypt a V3 keystore file.
    pub fn from_keystore(path: &Path, password: &str) -> CredentialResult<Self> {
        let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
            CredentialError::Unavailable(format!(
                "Failed to unlock keystore {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(
            address = %signer.address(),
            keystore = %path.display(),
            "Keystore credential unlocked"
        );

        Ok(Self {
            signer,
            source: CredentialSource::Keystore {
                path: path.to_path_buf(),
            },
        })
    }

    /// Get the credential's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Where the key material came from.
    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Borrow the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("address", &self.address())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

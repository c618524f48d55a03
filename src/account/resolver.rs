//! Credential resolution from raw identifying material.
//!
//! # Responsibilities
//! - Map a keystore name or path to exactly one keystore file
//! - Apply password precedence before decrypting
//! - Parse raw private keys
//!
//! # Design Decisions
//! - Resolver is a trait so the context binder can run without real keys
//! - Two matching keystores is an error, not a guess
//! - Raw private keys need no password, so none is resolved for them

use std::path::{Path, PathBuf};

use crate::account::credential::Credential;
use crate::account::password::{resolve_password, PasswordPrompt};
use crate::account::types::{CredentialError, CredentialRequest, CredentialResult, RequestKind};
use crate::config::schema::expand_home;

/// Turns a credential request into an unlocked credential.
pub trait CredentialResolver {
    fn resolve(&self, request: CredentialRequest) -> CredentialResult<Credential>;
}

/// Resolver for keystores on local disk and raw private keys.
pub struct LocalResolver {
    /// Directory searched for named keystores.
    keystore_dir: PathBuf,
    /// Fallback when neither a password nor a password file is supplied.
    prompt: Box<dyn PasswordPrompt>,
}

impl LocalResolver {
    pub fn new(keystore_dir: impl AsRef<Path>, prompt: Box<dyn PasswordPrompt>) -> Self {
        Self {
            keystore_dir: expand_home(keystore_dir.as_ref()),
            prompt,
        }
    }

    /// Locate the keystore file for a name or path.
    pub fn find_keystore(&self, identifier: &str) -> CredentialResult<PathBuf> {
        let direct = expand_home(Path::new(identifier));
        if direct.is_file() {
            return Ok(direct);
        }

        let mut candidates: Vec<PathBuf> = [
            self.keystore_dir.join(identifier),
            self.keystore_dir.join(format!("{}.json", identifier)),
        ]
        .into_iter()
        .filter(|path| path.is_file())
        .collect();

        if candidates.len() > 1 {
            return Err(CredentialError::Ambiguous {
                identifier: identifier.to_string(),
                candidates,
            });
        }

        candidates.pop().ok_or_else(|| {
            CredentialError::Unavailable(format!(
                "No keystore found for account '{}' (searched {})",
                identifier,
                self.keystore_dir.display()
            ))
        })
    }
}

impl CredentialResolver for LocalResolver {
    fn resolve(&self, request: CredentialRequest) -> CredentialResult<Credential> {
        let credential = match &request.kind {
            RequestKind::Keystore { identifier } => {
                let path = self.find_keystore(identifier)?;
                let password = resolve_password(
                    request.password.as_ref(),
                    request.password_file.as_deref(),
                    self.prompt.as_ref(),
                    &format!("Enter password for keystore '{}'", identifier),
                )?;
                Credential::from_keystore(&path, &password)?
            }
            RequestKind::PrivateKey { key } => Credential::from_private_key(key)?,
        };

        tracing::info!(
            address = %credential.address(),
            source = %request.describe(),
            "Account unlocked"
        );

        Ok(credential)
    }
}

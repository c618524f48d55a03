//! Execution environment: where resolved accounts end up.
//!
//! # Data Flow
//! ```text
//! ContextBinder
//!     → fork mode: set_implicit_account(address)   (identity only)
//!     → live mode: add_account(credential, true)   (primary signer)
//!     → transaction code reads the default account / signer
//! ```
//!
//! # Design Decisions
//! - Passed explicitly as a trait object instead of a process global
//! - One environment per process; callers serialize access

use alloy::primitives::{Address, Signature};
use alloy::signers::SignerSync;
use std::collections::HashMap;

use crate::account::Credential;

/// Sink for resolved accounts.
pub trait ExecutionEnv {
    /// Register a signing account, optionally making it the default sender.
    fn add_account(&mut self, credential: Credential, force_primary: bool);

    /// Use `address` as the sender without any signing capability.
    fn set_implicit_account(&mut self, address: Address);

    /// Whether a default sender is already set.
    fn has_default_account(&self) -> bool;
}

/// In-memory execution environment.
#[derive(Default)]
pub struct Environment {
    /// Signing accounts by address.
    accounts: HashMap<Address, Credential>,
    /// Default sender, signing or implicit.
    eoa: Option<Address>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default sender address, if any.
    pub fn default_account(&self) -> Option<Address> {
        self.eoa
    }

    /// The default sender when it has no signer behind it.
    pub fn implicit_account(&self) -> Option<Address> {
        self.eoa.filter(|address| !self.accounts.contains_key(address))
    }

    /// Look up the signer registered for an address.
    pub fn signer_for(&self, address: &Address) -> Option<&Credential> {
        self.accounts.get(address)
    }

    /// Number of registered signing accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Sign a message (with Ethereum prefix) as the default sender.
    ///
    /// Returns `None` when the default sender has no signer, e.g. in fork mode.
    pub fn sign_message(&self, message: &[u8]) -> Option<Result<Signature, alloy::signers::Error>> {
        let credential = self.eoa.as_ref().and_then(|address| self.accounts.get(address))?;
        Some(credential.signer().sign_message_sync(message))
    }
}

impl ExecutionEnv for Environment {
    fn add_account(&mut self, credential: Credential, force_primary: bool) {
        let address = credential.address();
        if force_primary || self.eoa.is_none() {
            self.eoa = Some(address);
        }

        tracing::debug!(address = %address, primary = self.eoa == Some(address), "Account added");
        self.accounts.insert(address, credential);
    }

    fn set_implicit_account(&mut self, address: Address) {
        tracing::debug!(address = %address, "Implicit account set");
        self.eoa = Some(address);
    }

    fn has_default_account(&self) -> bool {
        self.eoa.is_some()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("accounts", &self.accounts.keys().collect::<Vec<_>>())
            .field("eoa", &self.eoa)
            .finish()
    }
}

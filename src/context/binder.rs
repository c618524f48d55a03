//! Context binder: network selection, live confirmation, credential binding.
//!
//! # Stages
//! ```text
//! Start
//!   → ConflictChecked    fork + explicit account rejected before any side effect
//!   → NetworkActivated   at most one registry activation, only for an explicit selector
//!   → DefaultsResolved   unset inputs inherit the active network's defaults
//!   → Confirmed          live broadcast only; anything but y/Y ends in Cancelled
//!   → CredentialResolved keystore first, then private key (the later one wins)
//!   → Bound              fork: implicit sender, live: primary signer
//! ```
//!
//! Binding is the last step, so a failure at any earlier stage leaves the
//! environment untouched.

use crate::account::{Credential, CredentialRequest, CredentialResolver};
use crate::context::confirm::{Confirmer, LIVE_BROADCAST_WARNING};
use crate::context::types::{
    BindOutcome, BoundCredential, ContextError, ContextResult, ResolutionInput, ResolvedContext,
};
use crate::env::ExecutionEnv;
use crate::network::NetworkRegistry;

/// Resolves one execution context and binds its credential.
///
/// Intended to run once per process before any transaction work. The
/// environment is mutated without internal locking; concurrent binds
/// must be serialized by the caller.
pub struct ContextBinder<'a> {
    networks: &'a mut dyn NetworkRegistry,
    resolver: &'a dyn CredentialResolver,
    confirmer: &'a dyn Confirmer,
}

impl<'a> ContextBinder<'a> {
    pub fn new(
        networks: &'a mut dyn NetworkRegistry,
        resolver: &'a dyn CredentialResolver,
        confirmer: &'a dyn Confirmer,
    ) -> Self {
        Self {
            networks,
            resolver,
            confirmer,
        }
    }

    /// Resolve `input` against the active network and bind the result into `env`.
    pub fn bind(
        &mut self,
        input: ResolutionInput,
        env: &mut dyn ExecutionEnv,
    ) -> ContextResult<BindOutcome> {
        let explicit_account = input.account.as_deref().is_some_and(|a| !a.is_empty());
        if input.fork == Some(true) && explicit_account {
            return Err(ContextError::ConfigurationConflict);
        }

        let url = input.url.as_deref().filter(|s| !s.is_empty());
        let name = input.network.as_deref().filter(|s| !s.is_empty());
        if let Some(selector) = url.or(name) {
            self.networks.set_active_network(selector, input.fork)?;
        }

        let network = self
            .networks
            .active_network()
            .cloned()
            .ok_or(ContextError::NoActiveNetwork)?;

        let fork = input.fork.unwrap_or(network.is_fork);
        let password_file = input
            .password_file_path
            .or_else(|| network.unsafe_password_file.clone());
        let account = input
            .account
            .or_else(|| network.default_account_name.clone());
        let prompt_live = input.prompt_live.or(network.prompt_live).unwrap_or(false);

        tracing::debug!(
            network = %network.name,
            fork,
            prompt_live,
            "Resolution defaults applied"
        );

        if prompt_live && !fork && !self.confirmer.confirm(LIVE_BROADCAST_WARNING)? {
            tracing::info!("Operation cancelled.");
            return Ok(BindOutcome::Cancelled);
        }

        let mut credential: Option<Credential> = None;
        if let Some(account) = account.filter(|a| !a.is_empty()) {
            let request = CredentialRequest::keystore(account)
                .with_password(input.password.clone())
                .with_password_file(password_file.clone());
            credential = Some(self.resolver.resolve(request)?);
        }
        if let Some(key) = input.private_key.filter(|k| !k.is_empty()) {
            let request = CredentialRequest::private_key(key.as_str())
                .with_password(input.password)
                .with_password_file(password_file);
            credential = Some(self.resolver.resolve(request)?);
        }

        let bound = credential.map(|credential| {
            let summary = BoundCredential::from(&credential);
            if fork {
                env.set_implicit_account(summary.address);
            } else {
                env.add_account(credential, true);
            }
            summary
        });

        if !env.has_default_account() {
            tracing::warn!(
                "No default account found. Add an account to the environment before attempting a transaction."
            );
        }

        if let Some(bound) = &bound {
            tracing::info!(
                network = %network.name,
                address = %bound.address,
                mode = if fork { "fork" } else { "live" },
                "Execution context bound"
            );
        }

        Ok(BindOutcome::Bound(ResolvedContext {
            network,
            fork,
            credential: bound,
        }))
    }
}

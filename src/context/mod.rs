//! Execution context resolution.
//!
//! # Data Flow
//! ```text
//! ResolutionInput (CLI flags, all optional)
//!     → binder.rs (conflict check, network activation, default fallback)
//!     → confirm.rs (live-broadcast confirmation)
//!     → account::CredentialResolver (at most one keystore + one private key)
//!     → env::ExecutionEnv (implicit sender or primary signer)
//!     → BindOutcome::Bound(ResolvedContext) | BindOutcome::Cancelled
//! ```
//!
//! # Design Decisions
//! - Every collaborator is injected: registry, resolver, confirmer, environment
//! - Declining the live prompt is an outcome, not an error
//! - `Option` is the tri-state: `None` inherits, `Some(false)` is kept

pub mod binder;
pub mod confirm;
pub mod types;

pub use binder::ContextBinder;
pub use confirm::{Confirmer, LineConfirmer, LinePrompt, LIVE_BROADCAST_WARNING};
pub use types::{
    BindOutcome, BoundCredential, ContextError, ContextResult, ResolutionInput, ResolvedContext,
};

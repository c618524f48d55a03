//! Network and account resolution for deployment scripts.
//!
//! Turns partially specified command-line inputs (network, RPC URL, fork
//! flag, account, private key, password, password file) plus the project
//! file into exactly one execution context, then binds the unlocked
//! credential into the execution environment used by transaction code.

// Core subsystems
pub mod account;
pub mod config;
pub mod context;
pub mod env;
pub mod network;

// Cross-cutting concerns
pub mod observability;
pub mod terminal;

pub use config::schema::ProjectConfig;
pub use context::{BindOutcome, ContextBinder, ResolutionInput, ResolvedContext};
pub use env::{Environment, ExecutionEnv};

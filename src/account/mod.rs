//! Account and credential subsystem.
//!
//! # Data Flow
//! ```text
//! CredentialRequest (keystore name/path or private key, password, password file)
//!     → resolver.rs (keystore lookup, entry-form dispatch)
//!     → password.rs (explicit > file > prompt)
//!     → credential.rs (decrypt / parse into a signer)
//!     → Credential handed to the execution environment
//! ```
//!
//! # Security Constraints
//! - Passwords and private-key strings live in `Zeroizing` buffers
//! - Never log key material or passwords
//! - A requested credential that cannot be unlocked is an error

pub mod credential;
pub mod password;
pub mod resolver;
pub mod types;

pub use credential::Credential;
pub use password::PasswordPrompt;
pub use resolver::{CredentialResolver, LocalResolver};
pub use types::{CredentialError, CredentialRequest, CredentialResult, CredentialSource, RequestKind};

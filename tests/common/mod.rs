//! Shared test doubles for context binding tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use alloy::primitives::Address;
use deploy_context::account::{
    Credential, CredentialError, CredentialRequest, CredentialResolver, CredentialResult,
    PasswordPrompt, RequestKind,
};
use deploy_context::config::schema::{NetworkConfig, ProjectConfig};
use deploy_context::context::LinePrompt;
use deploy_context::env::ExecutionEnv;
use deploy_context::network::{ActiveNetwork, NetworkRegistry, NetworkResult, Networks};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use zeroize::Zeroizing;

// Anvil's first two accounts.
pub const ALICE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const ALICE_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const BOB_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const BOB_ADDRESS: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

pub fn address(hex: &str) -> Address {
    hex.parse().unwrap()
}

pub fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Project with a live `sepolia` and a forked `mainnet-fork`.
pub fn project() -> ProjectConfig {
    let mut config = ProjectConfig::default();
    config.networks.insert(
        "sepolia".into(),
        NetworkConfig {
            url: Some("https://rpc.sepolia.org".into()),
            chain_id: Some(11155111),
            prompt_live: Some(false),
            ..Default::default()
        },
    );
    config.networks.insert(
        "mainnet-fork".into(),
        NetworkConfig {
            url: Some("https://eth.llamarpc.com".into()),
            fork: true,
            default_account_name: Some("alice".into()),
            ..Default::default()
        },
    );
    config
}

/// Registry that records every activation request.
pub struct RecordingRegistry {
    pub inner: Networks,
    pub activations: Vec<(String, Option<bool>)>,
}

impl RecordingRegistry {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            inner: Networks::from_config(config),
            activations: Vec::new(),
        }
    }

    pub fn with_default(mut config: ProjectConfig, name: &str) -> Self {
        config.default_network = Some(name.to_string());
        Self::new(&config)
    }
}

impl NetworkRegistry for RecordingRegistry {
    fn active_network(&self) -> Option<&ActiveNetwork> {
        self.inner.active_network()
    }

    fn set_active_network(&mut self, selector: &str, is_fork: Option<bool>) -> NetworkResult<()> {
        self.activations.push((selector.to_string(), is_fork));
        self.inner.set_active_network(selector, is_fork)
    }
}

/// What the stub resolver was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub kind: String,
    pub password: Option<String>,
    pub password_file: Option<PathBuf>,
}

/// Resolver mapping keystore names to fixed keys; private keys are parsed.
#[derive(Default)]
pub struct StubResolver {
    pub seen: RefCell<Vec<SeenRequest>>,
    pub failing: Vec<String>,
}

impl StubResolver {
    pub fn failing(identifier: &str) -> Self {
        Self {
            failing: vec![identifier.to_string()],
            ..Default::default()
        }
    }
}

impl CredentialResolver for StubResolver {
    fn resolve(&self, request: CredentialRequest) -> CredentialResult<Credential> {
        let kind = match &request.kind {
            RequestKind::Keystore { identifier } => format!("keystore:{identifier}"),
            RequestKind::PrivateKey { .. } => "private_key".to_string(),
        };
        self.seen.borrow_mut().push(SeenRequest {
            kind,
            password: request.password.as_ref().map(|p| p.to_string()),
            password_file: request.password_file.clone(),
        });

        match &request.kind {
            RequestKind::Keystore { identifier } if self.failing.contains(identifier) => Err(
                CredentialError::Unavailable(format!("wrong password for {identifier}")),
            ),
            RequestKind::Keystore { identifier } => match identifier.as_str() {
                "alice" => Credential::from_private_key(ALICE_KEY),
                "bob" => Credential::from_private_key(BOB_KEY),
                other => Err(CredentialError::Unavailable(format!("no keystore {other}"))),
            },
            RequestKind::PrivateKey { key } => Credential::from_private_key(key),
        }
    }
}

/// Line prompt answering with a fixed response and counting calls.
pub struct ScriptedLine {
    pub response: &'static str,
    pub calls: Cell<u32>,
}

impl ScriptedLine {
    pub fn answering(response: &'static str) -> Self {
        Self {
            response,
            calls: Cell::new(0),
        }
    }
}

impl LinePrompt for &ScriptedLine {
    fn read_line(&self, _prompt: &str) -> std::io::Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.response.to_string())
    }
}

/// Password prompt that must never be reached.
pub struct NoPasswordPrompt;

impl PasswordPrompt for NoPasswordPrompt {
    fn prompt_password(&self, prompt: &str) -> std::io::Result<Zeroizing<String>> {
        panic!("unexpected password prompt: {prompt}");
    }
}

/// Environment that records how it was mutated.
#[derive(Default)]
pub struct RecordingEnv {
    pub added: Vec<(Address, bool)>,
    pub implicit: Option<Address>,
    pub preexisting_default: bool,
}

impl ExecutionEnv for RecordingEnv {
    fn add_account(&mut self, credential: Credential, force_primary: bool) {
        self.added.push((credential.address(), force_primary));
    }

    fn set_implicit_account(&mut self, address: Address) {
        self.implicit = Some(address);
    }

    fn has_default_account(&self) -> bool {
        self.preexisting_default || self.implicit.is_some() || !self.added.is_empty()
    }
}

/// Layer collecting the messages of WARN events.
#[derive(Clone, Default)]
pub struct CapturedWarnings(Arc<Mutex<Vec<String>>>);

impl CapturedWarnings {
    /// Run `f` with this layer as the thread's subscriber.
    pub fn during<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedWarnings {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.lock().unwrap().push(message);
        }
    }
}

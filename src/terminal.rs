//! Terminal-backed prompts.

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::account::PasswordPrompt;
use crate::context::LinePrompt;

/// Prompts on the controlling terminal via `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

fn to_io(e: dialoguer::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

impl LinePrompt for TerminalPrompt {
    fn read_line(&self, prompt: &str) -> std::io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(to_io)
    }
}

impl PasswordPrompt for TerminalPrompt {
    fn prompt_password(&self, prompt: &str) -> std::io::Result<Zeroizing<String>> {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .map(Zeroizing::new)
            .map_err(to_io)
    }
}

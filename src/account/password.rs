//! Keystore password resolution.
//!
//! Precedence: explicit password > password file > interactive prompt.
//! A password file that cannot be read is an error, never "no password".

use std::path::Path;
use zeroize::Zeroizing;

use crate::account::types::{CredentialError, CredentialResult};
use crate::config::schema::expand_home;

/// Source of interactively entered passwords.
pub trait PasswordPrompt {
    /// Ask for a password without echoing it.
    fn prompt_password(&self, prompt: &str) -> std::io::Result<Zeroizing<String>>;
}

/// Pick the password for one unlock attempt.
pub fn resolve_password(
    explicit: Option<&Zeroizing<String>>,
    password_file: Option<&Path>,
    prompt: &dyn PasswordPrompt,
    prompt_text: &str,
) -> CredentialResult<Zeroizing<String>> {
    if let Some(password) = explicit {
        return Ok(password.clone());
    }

    if let Some(path) = password_file {
        return read_password_file(path);
    }

    prompt
        .prompt_password(prompt_text)
        .map_err(|e| CredentialError::Unavailable(format!("Password prompt failed: {}", e)))
}

/// Read a plain-text password file.
///
/// Trailing line endings are stripped; everything else is used verbatim.
pub fn read_password_file(path: &Path) -> CredentialResult<Zeroizing<String>> {
    let path = expand_home(path);
    let contents = Zeroizing::new(std::fs::read_to_string(&path).map_err(|e| {
        CredentialError::Unavailable(format!(
            "Cannot read password file {}: {}",
            path.display(),
            e
        ))
    })?);

    tracing::debug!(path = %path.display(), "Password read from file");

    Ok(Zeroizing::new(
        contents.trim_end_matches(&['\n', '\r'][..]).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingPrompt {
        calls: Cell<u32>,
    }

    impl PasswordPrompt for CountingPrompt {
        fn prompt_password(&self, _prompt: &str) -> std::io::Result<Zeroizing<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(Zeroizing::new("typed".to_string()))
        }
    }

    fn prompt() -> CountingPrompt {
        CountingPrompt { calls: Cell::new(0) }
    }

    #[test]
    fn test_explicit_password_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pw");
        std::fs::write(&file, "from-file\n").unwrap();
        let prompt = prompt();

        let explicit = Zeroizing::new("explicit".to_string());
        let password = resolve_password(Some(&explicit), Some(&file), &prompt, "pw").unwrap();

        assert_eq!(password.as_str(), "explicit");
        assert_eq!(prompt.calls.get(), 0);
    }

    #[test]
    fn test_password_file_beats_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pw");
        std::fs::write(&file, "  spaced pass \r\n").unwrap();
        let prompt = prompt();

        let password = resolve_password(None, Some(&file), &prompt, "pw").unwrap();

        assert_eq!(password.as_str(), "  spaced pass ");
        assert_eq!(prompt.calls.get(), 0);
    }

    #[test]
    fn test_prompt_is_last_resort() {
        let prompt = prompt();
        let password = resolve_password(None, None, &prompt, "pw").unwrap();
        assert_eq!(password.as_str(), "typed");
        assert_eq!(prompt.calls.get(), 1);
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = prompt();

        let err = resolve_password(None, Some(&dir.path().join("missing")), &prompt, "pw")
            .unwrap_err();

        assert!(matches!(err, CredentialError::Unavailable(_)));
        assert_eq!(prompt.calls.get(), 0);
    }
}

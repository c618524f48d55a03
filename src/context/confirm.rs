//! Live-broadcast confirmation.

/// Shown before any transaction is broadcast to a live network.
pub const LIVE_BROADCAST_WARNING: &str = "Transactions will be broadcast to a live network and spend gas from your account. Continue?\nType 'y' or 'Y' and press ENTER to continue";

/// Yes/no decision before live broadcast.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> std::io::Result<bool>;
}

/// Line-based prompt returning whatever the user typed.
pub trait LinePrompt {
    fn read_line(&self, prompt: &str) -> std::io::Result<String>;
}

/// Confirmer that accepts exactly `y`, in either case, from a line prompt.
pub struct LineConfirmer<P> {
    prompt: P,
}

impl<P: LinePrompt> LineConfirmer<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: LinePrompt> Confirmer for LineConfirmer<P> {
    fn confirm(&self, message: &str) -> std::io::Result<bool> {
        let response = self.prompt.read_line(message)?;
        Ok(is_affirmative(&response))
    }
}

/// `y` or `Y` and nothing else.
pub fn is_affirmative(response: &str) -> bool {
    response.eq_ignore_ascii_case("y")
}

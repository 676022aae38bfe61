//! Asynchronous chat session

use super::common::{ChatOptions, Conversation, SessionCore, Turn};
use crate::Error;

/// Chat session that awaits the reply delay on the tokio timer.
///
/// # Example
/// ```no_run
/// use fitfusion::chat::ChatSession;
///
/// # async fn example() {
/// let mut session = ChatSession::new();
/// let reply = session.send("How do I build muscle?").await.expect("message was blank");
/// println!("{}", reply.content);
/// # }
/// ```
#[derive(Debug)]
pub struct ChatSession {
    core: SessionCore,
}

impl ChatSession {
    /// Creates a session with default options.
    pub fn new() -> Self {
        Self::with_options(ChatOptions::default())
    }

    /// Creates a session configured from the environment. See [ChatOptions::from_env].
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::with_options(ChatOptions::from_env()?))
    }

    pub fn with_options(options: ChatOptions) -> Self {
        Self {
            core: SessionCore::new(options),
        }
    }

    pub fn options(&self) -> &ChatOptions {
        &self.core.options
    }

    pub fn conversation(&self) -> &Conversation {
        self.core.conversation()
    }

    /// Sends a user message and returns the assistant's reply turn.
    ///
    /// Returns [Error::EmptyMessage] without recording anything when the message is blank.
    pub async fn send(&mut self, message: &str) -> Result<&Turn, Error> {
        self.core.begin_turn(message)?;

        let delay = self.core.options.reply_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(self.core.complete_turn(message))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

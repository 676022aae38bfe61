use std::env;
use std::fmt;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::responder::{MatchMode, Responder};
use crate::Error;

/// Opening message of every new conversation.
pub const GREETING: &str =
    "Hi there! I'm your FitFusion AI assistant. Ask me anything about workouts, nutrition, our team, or managing muscle cramps!";

/// Delay before the assistant replies unless configured otherwise.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(600);

/// Overrides the reply delay, in milliseconds.
pub const REPLY_DELAY_ENV: &str = "FITFUSION_REPLY_DELAY_MS";

/// Overrides the match mode (`substring` or `whole-word`).
pub const MATCH_MODE_ENV: &str = "FITFUSION_MATCH_MODE";

/// Author of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into())
    }

    fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Ordered transcript of a chat session. Turns can be appended but never changed or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a conversation opened by the assistant's [GREETING].
    pub fn with_greeting() -> Self {
        let mut conversation = Self::new();
        conversation.push(Turn::assistant(GREETING));
        conversation
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub(crate) fn push(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }
}

/// Settings for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOptions {
    pub reply_delay: Duration,
    pub match_mode: MatchMode,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            match_mode: MatchMode::default(),
        }
    }
}

impl ChatOptions {
    /// Reads [REPLY_DELAY_ENV] and [MATCH_MODE_ENV], keeping defaults for unset or empty variables.
    pub fn from_env() -> Result<Self, Error> {
        let mut options = Self::default();

        if let Some(delay) = non_empty_var(REPLY_DELAY_ENV) {
            options.reply_delay = Duration::from_millis(delay.trim().parse()?);
        }

        if let Some(mode) = non_empty_var(MATCH_MODE_ENV) {
            options.match_mode = mode.parse()?;
        }

        Ok(options)
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// State shared by the blocking and async sessions.
#[derive(Debug)]
pub(super) struct SessionCore {
    pub(super) options: ChatOptions,
    responder: Responder,
    conversation: Conversation,
}

impl SessionCore {
    pub(super) fn new(options: ChatOptions) -> Self {
        info!(
            "chat session started ({} ms reply delay, {} matching)",
            options.reply_delay.as_millis(),
            options.match_mode
        );

        Self {
            options,
            responder: Responder::with_match_mode(options.match_mode),
            conversation: Conversation::with_greeting(),
        }
    }

    pub(super) fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Records the user's message. Blank messages are rejected and not recorded.
    pub(super) fn begin_turn(&mut self, message: &str) -> Result<(), Error> {
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }

        self.conversation.push(Turn::user(message));
        Ok(())
    }

    /// Answers the message recorded by [begin_turn](Self::begin_turn).
    pub(super) fn complete_turn(&mut self, message: &str) -> &Turn {
        let reply = self.responder.respond(message);
        debug!("turn {} answered", self.conversation.len());
        self.conversation.push(Turn::assistant(reply))
    }
}

//! Chat sessions for the FitFusion assistant.
//!
//! A session owns an append-only [Conversation] and a [Responder](crate::responder::Responder).
//! Each [send](blocking::ChatSession::send) appends the user's message, waits the configured
//! reply delay and appends the assistant's reply. The delay is cosmetic and has no effect on
//! which reply is chosen.
//!
//! Both flavours are available behind feature flags:
//!
//! * `sync` (default) - [blocking::ChatSession], waits on a timer channel.
//! * `async` - [ChatSession] awaits a tokio timer.

// Common types shared by both flavours
mod common;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "async")]
mod r#async;

pub use common::{ChatOptions, Conversation, Role, Turn, DEFAULT_REPLY_DELAY, GREETING, MATCH_MODE_ENV, REPLY_DELAY_ENV};

/// Blocking chat session.
#[cfg(feature = "sync")]
pub mod blocking {
    pub use super::sync::ChatSession;
}

#[cfg(feature = "async")]
pub use r#async::ChatSession;

#[cfg(all(feature = "sync", not(feature = "async")))]
pub use sync::ChatSession;

//! Domain library behind the FitFusion fitness site.
//!
//! The centerpiece is the [responder], a deterministic keyword-matched engine that answers
//! fitness questions from a fixed table of canned replies. Around it sit the [chat] session
//! that keeps the transcript, the subscription [pricing] shown on the plans page, the
//! [training] plan generator, and the [members] contracts for profiles, sign-in and the
//! admin user list.
//!
//!```
//! use fitfusion::responder;
//!
//! let reply = responder::respond("What causes cramps?");
//! assert!(reply.starts_with("Muscle cramps during exercise"));
//!```
//!
//! # Features
//!
//! * `sync` (default) - blocking [chat] session and collaborator traits.
//! * `async` - tokio based chat session and `async-trait` collaborator traits. When both are
//!   enabled the async types are re-exported at the top of each module and the blocking ones
//!   stay available under `blocking`.

/// Keyword-matched response engine.
pub mod responder;

/// Chat transcript and sessions.
pub mod chat;

/// Member profiles, sessions and admin listing.
pub mod members;

/// Subscription plans.
pub mod pricing;

/// Personalized weekly workout plans.
pub mod training;

/// A prelude module for convenient importing of commonly used types.
pub mod prelude;

mod errors;

#[cfg(test)]
pub(crate) mod stubs;

pub use errors::Error;
pub use responder::{respond, Responder};

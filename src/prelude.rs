//! A prelude module for convenient importing of commonly used types.
//!
//! ```rust
//! use fitfusion::prelude::*;
//!
//! let responder = Responder::with_match_mode(MatchMode::WholeWord);
//! assert_eq!(responder.respond("legacy"), DEFAULT_REPLY);
//! ```

pub use crate::Error;

// Responder
pub use crate::responder::{respond, MatchMode, Responder, DEFAULT_REPLY};

// Chat
#[cfg(any(feature = "sync", feature = "async"))]
pub use crate::chat::ChatSession;
pub use crate::chat::{ChatOptions, Conversation, Role, Turn};

// Pricing
pub use crate::pricing::{format_price, BillingPeriod, Plan, PLANS};

// Training
pub use crate::training::{generate_plan, Experience, Goal, PlanRequest, WorkoutDay};

// Members
pub use crate::members::{Profile, ProfileUpdate, Session};

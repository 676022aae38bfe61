//! Keyword-matched response engine behind the FitFusion chat assistant.
//!
//! A query is lowercased and then answered by the first of these phases that matches:
//!
//! 1. [Compound rules](rules::COMPOUND_RULES), in priority order.
//! 2. The [topic dictionary](dictionary::TOPICS), scanned in entry order for the first key
//!    contained in the query.
//! 3. [Courtesy replies](Courtesy) for greetings, thanks and requests for help.
//! 4. [DEFAULT_REPLY].
//!
//! Matching is plain substring containment by default, so "legacy" answers with the leg
//! workout reply. [MatchMode::WholeWord] is available for callers that want token
//! boundaries instead.
//!
//! ```
//! use fitfusion::responder::{self, dictionary};
//!
//! let reply = responder::respond("How do I build muscle?");
//! assert_eq!(reply, dictionary::lookup("muscle gain").unwrap().text);
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::Error;

pub mod courtesy;
pub mod dictionary;
pub mod rules;


pub use courtesy::{Courtesy, DEFAULT_REPLY};
pub use dictionary::{ResponseEntry, TOPICS};
pub use rules::{CompoundRule, Pattern, COMPOUND_RULES};

/// How a token is located inside a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Raw substring containment.
    #[default]
    Substring,
    /// Token must be bounded by the string edges or non-alphanumeric characters.
    WholeWord,
}

impl MatchMode {
    /// Reports whether `token` occurs in `query` under this mode.
    pub fn contains(&self, query: &str, token: &str) -> bool {
        match self {
            MatchMode::Substring => query.contains(token),
            MatchMode::WholeWord => contains_word(query, token),
        }
    }
}

fn contains_word(query: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    query.match_indices(token).any(|(start, _)| {
        let before = query[..start].chars().next_back();
        let after = query[start + token.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "whole-word" | "whole_word" => Ok(MatchMode::WholeWord),
            other => Err(Error::InvalidArgument(format!("unknown match mode: {other}"))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WholeWord => write!(f, "whole-word"),
        }
    }
}

/// The phase that produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// A compound rule selected this entry.
    Rule(&'static ResponseEntry),
    /// The dictionary scan found this entry's key in the query.
    Keyword(&'static ResponseEntry),
    Courtesy(Courtesy),
    Default,
}

impl Match {
    /// Reply text for this match.
    pub fn text(&self) -> &'static str {
        match self {
            Match::Rule(entry) | Match::Keyword(entry) => entry.text,
            Match::Courtesy(courtesy) => courtesy.text(),
            Match::Default => DEFAULT_REPLY,
        }
    }

    /// Topic key when the reply came from the dictionary.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Match::Rule(entry) | Match::Keyword(entry) => Some(entry.key),
            _ => None,
        }
    }
}

/// Maps free-text queries to canned replies.
///
/// Stateless and cheap to copy. The tables it consults are static, so any number of
/// threads may share one responder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Responder {
    mode: MatchMode,
}

impl Responder {
    pub const fn new() -> Self {
        Self {
            mode: MatchMode::Substring,
        }
    }

    pub const fn with_match_mode(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Process-wide responder using substring matching.
    pub fn global() -> &'static Self {
        static RESPONDER: Responder = Responder::new();
        &RESPONDER
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Determines which phase answers `query`.
    pub fn classify(&self, query: &str) -> Match {
        let query = query.to_lowercase();
        trace!("classifying {query:?} ({})", self.mode);

        if let Some((rule, entry)) = rules::first_match(COMPOUND_RULES, &query, self.mode)
            .and_then(|rule| dictionary::lookup(rule.key).map(|entry| (rule, entry)))
        {
            debug!("rule {} selected {:?}", rule.pattern, entry.key);
            return Match::Rule(entry);
        }

        if let Some(entry) = TOPICS.iter().find(|entry| self.mode.contains(&query, entry.key)) {
            debug!("keyword {:?} matched", entry.key);
            return Match::Keyword(entry);
        }

        match Courtesy::detect(&query, self.mode) {
            Some(courtesy) => {
                debug!("courtesy reply {courtesy:?}");
                Match::Courtesy(courtesy)
            }
            None => {
                debug!("no match for {query:?}");
                Match::Default
            }
        }
    }

    /// Returns the reply for `query`. Never fails and never returns an empty string.
    pub fn respond(&self, query: &str) -> &'static str {
        self.classify(query).text()
    }
}

/// Answers `query` with the [global](Responder::global) responder.
pub fn respond(query: &str) -> &'static str {
    Responder::global().respond(query)
}

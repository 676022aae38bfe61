//! Compound rules, checked before the keyword fallback.
//!
//! Each rule pairs a [Pattern] with a topic key from the dictionary. Rules are tried in
//! [COMPOUND_RULES] order and the first match wins.

use std::fmt;

use super::dictionary::topics;
use super::MatchMode;

/// A predicate over a normalized (lowercased) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The query contains the token.
    Contains(&'static str),
    /// Every sub-pattern matches.
    All(&'static [Pattern]),
    /// At least one sub-pattern matches.
    Any(&'static [Pattern]),
}

impl Pattern {
    pub fn matches(&self, query: &str, mode: MatchMode) -> bool {
        match self {
            Pattern::Contains(token) => mode.contains(query, token),
            Pattern::All(patterns) => patterns.iter().all(|pattern| pattern.matches(query, mode)),
            Pattern::Any(patterns) => patterns.iter().any(|pattern| pattern.matches(query, mode)),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, patterns: &[Pattern], separator: &str) -> fmt::Result {
            for (i, pattern) in patterns.iter().enumerate() {
                if i > 0 {
                    f.write_str(separator)?;
                }
                match pattern {
                    Pattern::Contains(_) => write!(f, "{pattern}")?,
                    _ => write!(f, "({pattern})")?,
                }
            }
            Ok(())
        }

        match self {
            Pattern::Contains(token) => write!(f, "{token:?}"),
            Pattern::All(patterns) => join(f, patterns, " & "),
            Pattern::Any(patterns) => join(f, patterns, " | "),
        }
    }
}

/// A pattern and the topic it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundRule {
    pub pattern: Pattern,
    pub key: &'static str,
}

impl CompoundRule {
    pub const fn new(pattern: Pattern, key: &'static str) -> Self {
        Self { pattern, key }
    }

    pub fn matches(&self, query: &str, mode: MatchMode) -> bool {
        self.pattern.matches(query, mode)
    }
}

use Pattern::{All, Any, Contains};

/// Compound rules in priority order.
pub static COMPOUND_RULES: &[CompoundRule] = &[
    CompoundRule::new(All(&[Contains("cramp"), Contains("cause")]), topics::CRAMP_CAUSE),
    CompoundRule::new(
        All(&[Contains("cramp"), Any(&[Contains("stop"), Contains("relief"), Contains("help")])]),
        topics::CRAMP_RELIEF,
    ),
    CompoundRule::new(All(&[Contains("cramp"), Any(&[Contains("prevent"), Contains("avoid")])]), topics::CRAMP_PREVENT),
    CompoundRule::new(
        Any(&[All(&[Contains("gain"), Contains("muscle")]), Contains("build muscle")]),
        topics::MUSCLE_GAIN,
    ),
    CompoundRule::new(All(&[Contains("before"), Contains("workout")]), topics::PRE_WORKOUT),
    CompoundRule::new(All(&[Any(&[Contains("after"), Contains("post")]), Contains("workout")]), topics::POST_WORKOUT),
    CompoundRule::new(All(&[Contains("fat"), Any(&[Contains("lose"), Contains("loss")])]), topics::FAT_LOSS),
    CompoundRule::new(All(&[Contains("belly"), Contains("fat")]), topics::BELLY_FAT),
    CompoundRule::new(
        All(&[Contains("how"), Contains("often"), Any(&[Contains("workout"), Contains("exercise")])]),
        topics::WORKOUT_FREQUENCY,
    ),
    CompoundRule::new(
        All(&[
            Any(&[Contains("new"), Contains("start"), Contains("beginner")]),
            Any(&[Contains("workout"), Contains("exercise")]),
        ]),
        topics::BEGINNER_WORKOUT,
    ),
    CompoundRule::new(Any(&[Contains("team"), Contains("founder"), Contains("create")]), topics::ABOUT),
];

/// Returns the first rule in `rules` matching the normalized query.
pub fn first_match(rules: &'static [CompoundRule], query: &str, mode: MatchMode) -> Option<&'static CompoundRule> {
    rules.iter().find(|rule| rule.matches(query, mode))
}

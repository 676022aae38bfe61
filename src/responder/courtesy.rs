//! Replies for queries that hit neither a rule nor a topic keyword.

use super::MatchMode;

/// Kind of courtesy reply, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Courtesy {
    Greeting,
    Thanks,
    Help,
}

impl Courtesy {
    pub const ALL: [Courtesy; 3] = [Courtesy::Greeting, Courtesy::Thanks, Courtesy::Help];

    /// Tokens that trigger this reply.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Courtesy::Greeting => &["hello", "hi"],
            Courtesy::Thanks => &["thank"],
            Courtesy::Help => &["help"],
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Courtesy::Greeting => "Hello! How can I help with your fitness journey today?",
            Courtesy::Thanks => "You're welcome! Feel free to ask if you have more fitness questions.",
            Courtesy::Help => "I can help with workout advice, nutrition tips, exercise techniques, and managing muscle soreness. You can also ask about our team or the story behind FitFusion. What would you like to know?",
        }
    }

    /// First courtesy kind whose tokens appear in the normalized query.
    pub fn detect(query: &str, mode: MatchMode) -> Option<Courtesy> {
        Courtesy::ALL
            .into_iter()
            .find(|courtesy| courtesy.tokens().iter().any(|token| mode.contains(query, token)))
    }
}

/// Reply when nothing else matches.
pub const DEFAULT_REPLY: &str = "I'm not sure about that specific topic. Try asking about workouts, nutrition, specific muscle groups like chest, back, legs, or about our founding team and story. You can also ask about dealing with muscle cramps.";

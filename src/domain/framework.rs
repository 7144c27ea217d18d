//! Brand framework value object.
//!
//! The structured brand description the collaborator (UI, caller) supplies
//! for a generation round. Immutable once constructed; the session never
//! mutates it.

use serde::{Deserialize, Serialize};

/// Structured description of a brand, the input to every generation round.
///
/// # Invariants
///
/// - All list fields are present (possibly empty, possibly containing empty
///   strings the collaborator never cleaned up). Empty entries are filtered
///   at prompt-composition time, not here: validation is the collaborator's
///   concern, and the composer must stay total over whatever arrives.
/// - An empty list still renders as an empty labeled section in the prompt;
///   sections are never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandFramework {
    /// Industry the brand operates in. Any string is accepted; an empty
    /// industry degrades the prompt but never errors.
    pub industry: String,
    /// Practical promises to customers.
    pub attributes: Vec<String>,
    /// Prosaic messaging that meets customers where they are.
    pub key_messages: Vec<String>,
    /// What the brand's tribe believes in.
    pub values: Vec<String>,
    /// Real anecdotes people tell about the brand.
    pub stories: Vec<String>,
    /// The difference the brand makes in customers' lives.
    pub vision: Vec<String>,
    /// The vision brought to life in a single line.
    pub tagline: Vec<String>,
    /// Words that must not appear in generated names.
    pub excluded_words: Vec<String>,
    /// Words worth playing on in generated names.
    pub interesting_words: Vec<String>,
}

impl BrandFramework {
    /// The six framework sections in prompt order, with their fixed labels.
    /// Labels are human-readable anchors for the completion service; the
    /// parser never looks at them.
    pub fn sections(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Attributes", self.attributes.as_slice()),
            ("Key Messages", self.key_messages.as_slice()),
            ("Values", self.values.as_slice()),
            ("Stories", self.stories.as_slice()),
            ("Vision", self.vision.as_slice()),
            ("Tagline", self.tagline.as_slice()),
        ]
    }
}

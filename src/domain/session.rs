//! Refinement state machine.
//!
//! One `RefinementState` accompanies a session from its first round to
//! whenever the collaborator discards it. There is no error state: a failed
//! round simply never reaches [`RefinementState::merge_round`], so the state
//! is left exactly as it was and the round can be retried.

use super::CategoryMap;

/// Mutable state accumulated across generation rounds.
///
/// # Invariants
///
/// - `rejected_names` grows monotonically within a session and contains no
///   duplicates. Insertion order is kept so that prompt serialization stays
///   deterministic.
/// - `generate_more` is false until the first successful round, true after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinementState {
    rejected_names: Vec<String>,
    existing_names: CategoryMap,
    generate_more: bool,
}

impl RefinementState {
    /// Creates the empty state a session starts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every name the user has rejected so far, in rejection order.
    pub fn rejected_names(&self) -> &[String] {
        &self.rejected_names
    }

    /// The full accepted result so far.
    pub fn existing_names(&self) -> &CategoryMap {
        &self.existing_names
    }

    /// False on the first round (full batch requested), true afterwards
    /// (incremental batch requested).
    pub fn generate_more(&self) -> bool {
        self.generate_more
    }

    /// Merges one successfully parsed round into the state.
    ///
    /// On the first round the result replaces `existing_names` wholesale and
    /// flips the session into generate-more mode. On later rounds the merge
    /// is additive per category: new candidates are appended to the existing
    /// list, categories only in the new result are added verbatim, and
    /// categories only in the old result are left untouched. The merge does
    /// not deduplicate across rounds; uniqueness is requested through the
    /// prompt's negative constraints, not enforced here.
    pub fn merge_round(&mut self, round: CategoryMap) {
        if self.generate_more {
            for (label, names) in round.iter() {
                self.existing_names.append(label, names.to_vec());
            }
        } else {
            self.existing_names = round;
            self.generate_more = true;
        }
    }

    /// Records a rejection: adds `name` to the rejected set (idempotent) and
    /// removes its first occurrence from `existing_names[category]`.
    ///
    /// Rejected names are serialized into the negative constraints of every
    /// subsequent prompt, but that is a request to the completion service,
    /// not a guarantee; freshly parsed output is not filtered against them.
    pub fn reject(&mut self, name: &str, category: &str) {
        if !self.rejected_names.iter().any(|n| n == name) {
            self.rejected_names.push(name.to_string());
        }
        self.existing_names.remove_first(category, name);
    }
}

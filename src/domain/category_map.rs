//! Ordered mapping from category label to candidate names.
//!
//! Category labels are open strings, never an enum: the category set is
//! defined by prompt text and by whatever the completion service actually
//! produces, and the two may drift in casing or punctuation between rounds.
//! Insertion order is preserved end to end because the rendered prompt and
//! the parsed completion both treat ordering as significant.

use serde::{Deserialize, Serialize};

/// One category and its candidate names, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Free-form label as the completion service produced it.
    pub label: String,
    /// Candidate names in the order they were generated.
    pub names: Vec<String>,
}

/// Insertion-ordered category -> names mapping.
///
/// # Invariants
///
/// - Labels are unique within the map; inserting under an existing label
///   appends to that entry rather than creating a duplicate.
/// - Entry order and per-entry name order are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap {
    entries: Vec<CategoryEntry>,
}

impl CategoryMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no categories are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names under the given label, if the category exists.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.names.as_slice())
    }

    /// Appends names under `label`, creating the category at the end of the
    /// map if it does not exist yet. An empty `names` still creates the
    /// category: a label with no candidates is a present-but-empty key.
    pub fn append(&mut self, label: impl Into<String>, names: impl IntoIterator<Item = String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.names.extend(names),
            None => self.entries.push(CategoryEntry {
                label,
                names: names.into_iter().collect(),
            }),
        }
    }

    /// Removes the first occurrence of `name` under `label`. No-op when the
    /// category or the name is absent. Returns true when a name was removed.
    pub fn remove_first(&mut self, label: &str, name: &str) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.label == label) {
            if let Some(pos) = entry.names.iter().position(|n| n == name) {
                entry.names.remove(pos);
                return true;
            }
        }
        false
    }

    /// Iterates categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.label.as_str(), e.names.as_slice()))
    }

    /// Total number of names across all categories.
    pub fn name_count(&self) -> usize {
        self.entries.iter().map(|e| e.names.len()).sum()
    }
}

impl FromIterator<(String, Vec<String>)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut map = CategoryMap::new();
        for (label, names) in iter {
            map.append(label, names);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryMap {
        let mut map = CategoryMap::new();
        map.append("Animal Names", vec!["Fox".to_string(), "Owl".to_string()]);
        map.append("Playful Names", vec!["Zippy".to_string()]);
        map
    }

    #[test]
    fn append_preserves_insertion_order() {
        let map = sample();
        let labels: Vec<&str> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Animal Names", "Playful Names"]);
    }

    #[test]
    fn append_to_existing_label_extends_entry() {
        let mut map = sample();
        map.append("Animal Names", vec!["Lynx".to_string()]);
        assert_eq!(
            map.get("Animal Names"),
            Some(&["Fox".to_string(), "Owl".to_string(), "Lynx".to_string()][..])
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_names_still_creates_category() {
        let mut map = CategoryMap::new();
        map.append("Symbolic Names", Vec::new());
        assert_eq!(map.get("Symbolic Names"), Some(&[][..]));
    }

    #[test]
    fn remove_first_takes_one_occurrence() {
        let mut map = CategoryMap::new();
        map.append(
            "Animal Names",
            vec!["Fox".to_string(), "Owl".to_string(), "Fox".to_string()],
        );
        assert!(map.remove_first("Animal Names", "Fox"));
        assert_eq!(
            map.get("Animal Names"),
            Some(&["Owl".to_string(), "Fox".to_string()][..])
        );
    }

    #[test]
    fn remove_first_is_noop_for_missing_name_or_category() {
        let mut map = sample();
        assert!(!map.remove_first("Animal Names", "Bear"));
        assert!(!map.remove_first("Literal Names", "Fox"));
        assert_eq!(map, sample());
    }
}

//! Name to index lookup for column and row names.
//!
//! The table is a cache over a name sequence owned elsewhere. It can be
//! thrown away at any time and rebuilt with [`NameHash::form`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// What a name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEntry {
    /// The name occurs once, at this position.
    Index(usize),
    /// The name occurs more than once and cannot be resolved.
    Duplicate,
}

/// Cache mapping each distinct name to its position.
#[derive(Debug, Clone, Default)]
pub struct NameHash {
    name_to_index: HashMap<String, NameEntry>,
}

impl NameHash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from scratch. A repeated name loses its original mapping and
    /// is marked [`NameEntry::Duplicate`].
    pub fn form(&mut self, names: &[String]) {
        self.clear();
        self.name_to_index.reserve(names.len());
        for (index, name) in names.iter().enumerate() {
            match self.name_to_index.entry(name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(NameEntry::Index(index));
                }
                Entry::Occupied(mut slot) => {
                    slot.insert(NameEntry::Duplicate);
                }
            }
        }
    }

    /// True at the first repeated name. The table is left empty either way.
    pub fn has_duplicate(&mut self, names: &[String]) -> bool {
        self.clear();
        let mut has_duplicate = false;
        for (index, name) in names.iter().enumerate() {
            if self
                .name_to_index
                .insert(name.clone(), NameEntry::Index(index))
                .is_some()
            {
                has_duplicate = true;
                break;
            }
        }
        self.clear();
        has_duplicate
    }

    pub fn clear(&mut self) {
        self.name_to_index.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }

    /// Number of distinct names held, duplicates included.
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    pub fn get(&self, name: &str) -> Option<NameEntry> {
        self.name_to_index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Insert a name that must not be present yet. Returns false, leaving the
    /// table unchanged, if it already was.
    pub fn insert_unique(&mut self, name: &str, index: usize) -> bool {
        match self.name_to_index.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(NameEntry::Index(index));
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_form_unique_names() {
        let mut hash = NameHash::new();
        hash.form(&names(&["A", "B", "C"]));
        assert_eq!(hash.len(), 3);
        assert_eq!(hash.get("A"), Some(NameEntry::Index(0)));
        assert_eq!(hash.get("B"), Some(NameEntry::Index(1)));
        assert_eq!(hash.get("C"), Some(NameEntry::Index(2)));
        assert_eq!(hash.get("D"), None);
    }

    #[test]
    fn test_form_marks_duplicates_unresolvable() {
        let mut hash = NameHash::new();
        hash.form(&names(&["A", "B", "A"]));
        assert_eq!(hash.len(), 2);
        assert_eq!(hash.get("A"), Some(NameEntry::Duplicate));
        assert_eq!(hash.get("B"), Some(NameEntry::Index(1)));
    }

    #[test]
    fn test_triple_occurrence_stays_duplicate() {
        let mut hash = NameHash::new();
        hash.form(&names(&["x", "x", "y", "x"]));
        assert_eq!(hash.get("x"), Some(NameEntry::Duplicate));
        assert_eq!(hash.get("y"), Some(NameEntry::Index(2)));
    }

    #[test]
    fn test_form_discards_previous_contents() {
        let mut hash = NameHash::new();
        hash.form(&names(&["old"]));
        hash.form(&names(&["new"]));
        assert!(!hash.contains("old"));
        assert_eq!(hash.get("new"), Some(NameEntry::Index(0)));
    }

    #[test]
    fn test_has_duplicate_leaves_table_empty() {
        let mut hash = NameHash::new();
        hash.form(&names(&["keep"]));
        assert!(hash.has_duplicate(&names(&["A", "B", "A"])));
        assert!(hash.is_empty());

        hash.form(&names(&["keep"]));
        assert!(!hash.has_duplicate(&names(&["A", "B", "C"])));
        assert!(hash.is_empty());
    }

    #[test]
    fn test_insert_unique_rejects_existing() {
        let mut hash = NameHash::new();
        assert!(hash.insert_unique("c0", 0));
        assert!(!hash.insert_unique("c0", 1));
        assert_eq!(hash.get("c0"), Some(NameEntry::Index(0)));
    }
}

//! The column-rename mapping store.
//!
//! Holds the user's source-field to target-field renames for the currently
//! loaded table. Entries are keyed by source and keep insertion order, which
//! drives both projected-record key order and the last-write-wins rule when
//! two sources share a target.

/// Insertion-ordered source -> target rename entries, unique by source.
///
/// Target names are free-form and deliberately not checked for uniqueness:
/// two sources mapped to the same target is a meaningful request (the
/// later-inserted entry's value survives per record at projection time).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMapping {
    entries: Vec<(String, String)>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `source`.
    ///
    /// Overwriting keeps the entry at its original position; only a new
    /// source appends.
    pub fn set(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(key, _)| *key == source) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((source, target)),
        }
    }

    /// Drop every entry. Called whenever a new table replaces the current
    /// one; a mapping only means anything against the header it was built
    /// for.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Independent copy for a projection in flight; later edits to the store
    /// cannot reach it.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == source)
            .map(|(_, target)| target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_appends_new_sources_in_order() {
        let mut mapping = ColumnMapping::new();
        mapping.set("Name", "id");
        mapping.set("Age", "years");

        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![("Name", "id"), ("Age", "years")]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut mapping = ColumnMapping::new();
        mapping.set("Name", "id");
        mapping.set("Age", "years");
        mapping.set("Name", "label");

        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![("Name", "label"), ("Age", "years")]);
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut mapping = ColumnMapping::new();
        mapping.set("Name", "id");
        let snapshot = mapping.snapshot();
        mapping.set("Name", "changed");
        mapping.set("Age", "years");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.target_for("Name"), Some("id"));
    }

    #[test]
    fn clear_empties_the_store() {
        let mut mapping = ColumnMapping::new();
        mapping.set("Name", "id");
        mapping.clear();
        assert!(mapping.is_empty());
    }
}

//! Display-only sort state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sort directive: which field to order by, and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Tracks which column header the user last asked to sort by.
///
/// Transient and display-only; it never survives a table reload and never
/// affects export order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    key: Option<SortKey>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one header click: the same field twice in a row while
    /// ascending flips to descending, anything else lands on ascending.
    pub fn request(&mut self, field: &str) {
        let direction = match &self.key {
            Some(key) if key.field == field && key.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.key = Some(SortKey {
            field: field.to_string(),
            direction,
        });
    }

    pub fn key(&self) -> Option<&SortKey> {
        self.key.as_ref()
    }

    /// Back to natural order.
    pub fn reset(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_toggle_direction() {
        let mut state = SortState::new();
        state.request("Age");
        assert_eq!(state.key().unwrap().direction, SortDirection::Ascending);
        state.request("Age");
        assert_eq!(state.key().unwrap().direction, SortDirection::Descending);
        state.request("Age");
        assert_eq!(state.key().unwrap().direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let mut state = SortState::new();
        state.request("Age");
        state.request("Age");
        state.request("Name");
        let key = state.key().unwrap();
        assert_eq!(key.field, "Name");
        assert_eq!(key.direction, SortDirection::Ascending);
    }

    #[test]
    fn reset_clears_the_key() {
        let mut state = SortState::new();
        state.request("Age");
        state.reset();
        assert!(state.key().is_none());
    }
}

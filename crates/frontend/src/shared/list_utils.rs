/// Search and sort helpers for the client-side grids
use std::cmp::Ordering;

/// Queries shorter than this do not filter (avoids flicker while typing).
pub const MIN_FILTER_LEN: usize = 3;

/// Row types that can be matched against a free-text query
pub trait Searchable {
    /// `filter` is already lowercased and trimmed.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring match helper for `Searchable` impls.
pub fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Rows matching `filter`; all rows when the query is too short.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.chars().count() < MIN_FILTER_LEN {
        return items.to_vec();
    }
    let lowered = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&lowered))
        .cloned()
        .collect()
}

/// Stable sort by column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Column sort state of a grid header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        match (self.field == field, self.ascending) {
            (false, _) => "",
            (true, true) => " ▲",
            (true, false) => " ▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        age: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "age" => self.age.cmp(&other.age),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Maria Garcia", age: 29 },
            Row { name: "Tom Miller", age: 52 },
            Row { name: "Marco Rossi", age: 41 },
        ]
    }

    #[test]
    fn test_short_query_keeps_everything() {
        assert_eq!(filter_list(&rows(), "ma").len(), 3);
        assert_eq!(filter_list(&rows(), "   ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(&rows(), "MAR");
        let names: Vec<&str> = found.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Maria Garcia", "Marco Rossi"]);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "age", true);
        assert_eq!(items[0].age, 29);
        sort_list(&mut items, "age", false);
        assert_eq!(items[0].age, 52);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut state = SortState::new("name");
        state.toggle("name");
        assert!(!state.ascending);
        state.toggle("age");
        assert_eq!(state, SortState { field: "age", ascending: true });
        assert_eq!(state.indicator("age"), " ▲");
        assert_eq!(state.indicator("name"), "");
    }
}

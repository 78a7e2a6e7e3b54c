//! Result picker: the checked subset of the latest search results.

use std::collections::BTreeSet;

use crate::movie::MovieRecord;
use crate::{ReelpickError, Result};

/// Search results plus the checkbox state for each of them.
///
/// Selection is keyed by display position, so the same title appearing twice
/// can be checked independently. Replacing the results always clears the
/// selection: indices never outlive the search that produced them.
///
/// Each replacement bumps a generation counter. Clients echo the generation
/// they rendered so a checkbox from an older result list is refused instead
/// of checking whatever now sits at the same position.
#[derive(Debug, Clone, Default)]
pub struct ResultPicker {
    query: Option<String>,
    results: Vec<MovieRecord>,
    checked: BTreeSet<usize>,
    generation: u64,
}

impl ResultPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the results of a new search and drops any prior selection.
    pub fn replace_results(&mut self, query: impl Into<String>, results: Vec<MovieRecord>) {
        self.query = Some(query.into());
        self.results = results;
        self.checked.clear();
        self.generation += 1;
    }

    /// Number of result lists installed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Checks that `generation` names the result list currently installed.
    ///
    /// # Errors
    /// - `ReelpickError::StaleResults` - A newer search replaced those results
    pub fn ensure_generation(&self, generation: u64) -> Result<()> {
        if generation == self.generation {
            Ok(())
        } else {
            Err(ReelpickError::StaleResults {
                generation,
                current: self.generation,
            })
        }
    }

    /// Query that produced the current results.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn results(&self) -> &[MovieRecord] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Flips the checkbox at `index` and returns its new state.
    ///
    /// # Errors
    /// - `ReelpickError::Selection` - `index` is not a position in the current results
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.ensure_in_range(index)?;
        if self.checked.remove(&index) {
            Ok(false)
        } else {
            self.checked.insert(index);
            Ok(true)
        }
    }

    /// Sets the checkbox at `index` to `checked`.
    ///
    /// # Errors
    /// - `ReelpickError::Selection` - `index` is not a position in the current results
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<()> {
        self.ensure_in_range(index)?;
        if checked {
            self.checked.insert(index);
        } else {
            self.checked.remove(&index);
        }
        Ok(())
    }

    /// Replaces the selection with exactly `indices`.
    ///
    /// Validates every index before touching state, so a bad index leaves the
    /// previous selection intact.
    ///
    /// # Errors
    /// - `ReelpickError::Selection` - Any index is out of range
    pub fn select_indices<I>(&mut self, indices: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        let wanted: BTreeSet<usize> = indices.into_iter().collect();
        if let Some(&bad) = wanted.iter().find(|&&i| i >= self.results.len()) {
            return Err(ReelpickError::Selection {
                index: bad,
                len: self.results.len(),
            });
        }
        self.checked = wanted;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.checked = (0..self.results.len()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.checked.clear();
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked records in display order.
    pub fn selected(&self) -> Vec<&MovieRecord> {
        self.checked
            .iter()
            .filter_map(|&i| self.results.get(i))
            .collect()
    }

    fn ensure_in_range(&self, index: usize) -> Result<()> {
        if index < self.results.len() {
            Ok(())
        } else {
            Err(ReelpickError::Selection {
                index,
                len: self.results.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::CatalogSource;

    fn records(titles: &[&str]) -> Vec<MovieRecord> {
        titles
            .iter()
            .map(|t| MovieRecord::new(*t, CatalogSource::Demo))
            .collect()
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["A", "B", "C"]));

        assert!(picker.toggle(1).unwrap());
        assert!(picker.is_checked(1));
        assert!(!picker.toggle(1).unwrap());
        assert_eq!(picker.selected_count(), 0);
    }

    #[test]
    fn test_out_of_range_toggle_is_rejected() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["A"]));

        let err = picker.toggle(3).unwrap_err();
        assert!(matches!(err, ReelpickError::Selection { index: 3, len: 1 }));
    }

    #[test]
    fn test_new_search_clears_selection() {
        let mut picker = ResultPicker::new();
        picker.replace_results("first", records(&["A", "B"]));
        picker.select_all();
        assert_eq!(picker.selected_count(), 2);

        picker.replace_results("second", records(&["C", "D", "E"]));

        assert_eq!(picker.selected_count(), 0);
        assert!(picker.selected().is_empty());
        assert_eq!(picker.query(), Some("second"));
    }

    #[test]
    fn test_picks_from_replaced_results_are_stale() {
        let mut picker = ResultPicker::new();
        assert_eq!(picker.generation(), 0);

        picker.replace_results("Matrix", records(&["A", "B", "C"]));
        let rendered = picker.generation();
        picker.replace_results("Godfather", records(&["D", "E", "F"]));

        let err = picker.ensure_generation(rendered).unwrap_err();
        assert!(matches!(
            err,
            ReelpickError::StaleResults { generation: 1, current: 2 }
        ));
        assert!(err.is_user_error());
        assert!(picker.ensure_generation(picker.generation()).is_ok());
        assert_eq!(picker.selected_count(), 0);
    }

    #[test]
    fn test_selected_follows_display_order() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["A", "B", "C", "D"]));
        picker.toggle(3).unwrap();
        picker.toggle(0).unwrap();
        picker.toggle(2).unwrap();

        let titles: Vec<&str> = picker.selected().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_duplicate_titles_are_selected_by_position() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["Dune", "Dune"]));
        picker.toggle(1).unwrap();

        assert!(!picker.is_checked(0));
        assert_eq!(picker.selected().len(), 1);
    }

    #[test]
    fn test_select_indices_is_all_or_nothing() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["A", "B"]));
        picker.select_indices([0]).unwrap();

        assert!(picker.select_indices([1, 5]).is_err());
        assert!(picker.is_checked(0));
        assert!(!picker.is_checked(1));
    }

    #[test]
    fn test_set_checked_and_clear() {
        let mut picker = ResultPicker::new();
        picker.replace_results("q", records(&["A", "B"]));
        picker.set_checked(0, true).unwrap();
        picker.set_checked(0, true).unwrap();
        assert_eq!(picker.selected_count(), 1);

        picker.clear_selection();
        assert_eq!(picker.selected_count(), 0);
        assert_eq!(picker.results().len(), 2);
    }
}

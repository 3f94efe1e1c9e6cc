//! Выбор связанных элементов.
//!
//! `SelectionEditor` owns the loaded related items, the set of selected ids
//! and the save state. While a save is in flight every mutation is rejected
//! so that the request body always matches what the user sees.

use contracts::domain::a002_related_item::{
    RelatedItem, RelatedItemId, SelectionEntry, UpdateSelectedRequest,
};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(BTreeSet<RelatedItemId>);

impl SelectionSet {
    /// Ids whose server-side flag is `selected: true`
    pub fn from_items(items: &[RelatedItem]) -> Self {
        Self(
            items
                .iter()
                .filter(|item| item.is_selected())
                .map(|item| item.id)
                .collect(),
        )
    }

    pub fn contains(&self, id: RelatedItemId) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: RelatedItemId) {
        self.0.insert(id);
    }

    pub fn toggle(&mut self, id: RelatedItemId) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection is being saved")]
    SaveInFlight,
}

/// Text of the alert shown when a save completes
pub fn save_outcome_message(result: &Result<(), String>) -> String {
    match result {
        Ok(()) => "Selections saved successfully".to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionEditor {
    items: Vec<RelatedItem>,
    selection: SelectionSet,
    state: SaveState,
}

impl SelectionEditor {
    pub fn new(items: Vec<RelatedItem>) -> Self {
        let mut editor = Self::default();
        editor.initialize(items);
        editor
    }

    /// Replace the items and take the baseline selection from them
    pub fn initialize(&mut self, items: Vec<RelatedItem>) {
        self.selection = SelectionSet::from_items(&items);
        self.items = items;
        self.state = SaveState::Idle;
    }

    pub fn items(&self) -> &[RelatedItem] {
        &self.items
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: RelatedItemId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_saving(&self) -> bool {
        self.state == SaveState::Saving
    }

    /// True only for a non-empty item list with every item selected
    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.selection.len() == self.items.len()
    }

    pub fn toggle(&mut self, id: RelatedItemId) -> Result<(), SelectionError> {
        self.ensure_idle()?;
        self.selection.toggle(id);
        Ok(())
    }

    /// Clear when everything is selected, otherwise select every loaded item
    pub fn toggle_all(&mut self) -> Result<(), SelectionError> {
        self.ensure_idle()?;
        if self.all_selected() {
            self.selection.clear();
        } else {
            for item in &self.items {
                self.selection.insert(item.id);
            }
        }
        Ok(())
    }

    /// Enter `Saving` and build the batch body covering every loaded item
    pub fn begin_save(&mut self) -> Result<UpdateSelectedRequest, SelectionError> {
        self.ensure_idle()?;
        self.state = SaveState::Saving;

        let ids = self
            .items
            .iter()
            .map(|item| SelectionEntry {
                id: item.id,
                selected: self.selection.contains(item.id),
            })
            .collect();
        Ok(UpdateSelectedRequest { ids })
    }

    /// Back to `Idle`; the selection is kept either way
    pub fn finish_save(&mut self) {
        self.state = SaveState::Idle;
    }

    fn ensure_idle(&self) -> Result<(), SelectionError> {
        match self.state {
            SaveState::Idle => Ok(()),
            SaveState::Saving => Err(SelectionError::SaveInFlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, selected: Option<bool>) -> RelatedItem {
        RelatedItem {
            id: RelatedItemId(id),
            title: None,
            link: None,
            context: None,
            selected,
        }
    }

    fn ids(editor: &SelectionEditor) -> Vec<i64> {
        editor
            .items()
            .iter()
            .filter(|i| editor.is_selected(i.id))
            .map(|i| i.id.0)
            .collect()
    }

    #[test]
    fn test_initialize_and_toggle_all() {
        let mut editor = SelectionEditor::new(vec![item(1, Some(true)), item(2, Some(false))]);
        assert_eq!(ids(&editor), vec![1]);
        assert!(!editor.all_selected());

        editor.toggle_all().unwrap();
        assert_eq!(ids(&editor), vec![1, 2]);
        assert!(editor.all_selected());

        editor.toggle_all().unwrap();
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_missing_flag_is_unselected() {
        let editor = SelectionEditor::new(vec![item(1, None), item(2, Some(true))]);
        assert_eq!(ids(&editor), vec![2]);
    }

    #[test]
    fn test_empty_list_is_never_all_selected() {
        let mut editor = SelectionEditor::new(Vec::new());
        assert!(!editor.all_selected());

        editor.toggle_all().unwrap();
        assert_eq!(editor.selected_count(), 0);
    }

    #[test]
    fn test_toggle_single() {
        let mut editor = SelectionEditor::new(vec![item(1, None), item(2, None)]);
        editor.toggle(RelatedItemId(2)).unwrap();
        assert_eq!(ids(&editor), vec![2]);
        editor.toggle(RelatedItemId(2)).unwrap();
        assert_eq!(editor.selected_count(), 0);
    }

    #[test]
    fn test_begin_save_covers_every_item() {
        let mut editor =
            SelectionEditor::new(vec![item(1, Some(true)), item(2, None), item(3, Some(false))]);
        editor.toggle(RelatedItemId(3)).unwrap();

        let body = editor.begin_save().unwrap();
        assert!(editor.is_saving());
        assert_eq!(
            body.ids,
            vec![
                SelectionEntry { id: RelatedItemId(1), selected: true },
                SelectionEntry { id: RelatedItemId(2), selected: false },
                SelectionEntry { id: RelatedItemId(3), selected: true },
            ]
        );
    }

    #[test]
    fn test_mutations_rejected_while_saving() {
        let mut editor = SelectionEditor::new(vec![item(1, Some(true)), item(2, None)]);
        let before = editor.selection().clone();
        editor.begin_save().unwrap();

        assert_eq!(editor.begin_save(), Err(SelectionError::SaveInFlight));
        assert_eq!(editor.toggle(RelatedItemId(2)), Err(SelectionError::SaveInFlight));
        assert_eq!(editor.toggle_all(), Err(SelectionError::SaveInFlight));
        assert_eq!(editor.selection(), &before);
    }

    #[test]
    fn test_failed_save_keeps_selection() {
        let mut editor = SelectionEditor::new(vec![item(1, Some(true)), item(2, None)]);
        editor.toggle(RelatedItemId(2)).unwrap();
        let before = editor.selection().clone();

        editor.begin_save().unwrap();
        editor.finish_save();

        assert!(!editor.is_saving());
        assert_eq!(editor.selection(), &before);
        assert!(editor.toggle(RelatedItemId(1)).is_ok());
    }

    #[test]
    fn test_selection_set_ops() {
        let mut set = SelectionSet::default();
        set.insert(RelatedItemId(5));
        set.insert(RelatedItemId(5));
        assert_eq!(set.len(), 1);
        set.toggle(RelatedItemId(6));
        assert!(set.contains(RelatedItemId(6)));
        set.toggle(RelatedItemId(5));
        assert!(!set.contains(RelatedItemId(5)));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_save_outcome_messages() {
        assert_eq!(save_outcome_message(&Ok(())), "Selections saved successfully");
        assert_eq!(
            save_outcome_message(&Err("Failed to save: HTTP 500".to_string())),
            "Error: Failed to save: HTTP 500"
        );
    }

    #[test]
    fn test_rejected_save_keeps_pre_save_membership() {
        let mut editor =
            SelectionEditor::new(vec![item(1, Some(true)), item(2, None), item(3, None)]);
        editor.toggle(RelatedItemId(3)).unwrap();
        let before = editor.selection().clone();

        let body = editor.begin_save().unwrap();
        let result: Result<(), String> = Err("Failed to save: HTTP 500".to_string());
        assert!(save_outcome_message(&result).starts_with("Error: "));
        editor.finish_save();

        assert_eq!(editor.selection(), &before);
        assert_eq!(ids(&editor), vec![1, 3]);
        assert_eq!(body.selected_count(), 2);
        assert_eq!(editor.begin_save().unwrap(), body);
    }
}

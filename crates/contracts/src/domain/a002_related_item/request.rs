use super::aggregate::RelatedItemId;
use serde::{Deserialize, Serialize};

/// One row of the batch selection update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: RelatedItemId,
    pub selected: bool,
}

/// Body of `POST /update-selected`: the full selection state of every
/// related item of one product, not only the changed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSelectedRequest {
    pub ids: Vec<SelectionEntry>,
}

impl UpdateSelectedRequest {
    pub fn selected_count(&self) -> usize {
        self.ids.iter().filter(|entry| entry.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_selected_shape() {
        let request = UpdateSelectedRequest {
            ids: vec![
                SelectionEntry { id: RelatedItemId(1), selected: true },
                SelectionEntry { id: RelatedItemId(2), selected: false },
            ],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "ids": [
                { "id": 1, "selected": true },
                { "id": 2, "selected": false }
            ] })
        );
        assert_eq!(request.selected_count(), 1);
    }
}

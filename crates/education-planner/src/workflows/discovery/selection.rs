use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

pub const MAX_SELECTION: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("a shortlist holds at most 5 schools, found {0}")]
    TooMany(usize),
    #[error("school '{0}' appears more than once in the shortlist")]
    Duplicate(String),
}

/// Ordered shortlist of at most [`MAX_SELECTION`] distinct school ids.
/// Serialized as a plain list of ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    ids: Vec<String>,
}

impl TryFrom<Vec<String>> for Selection {
    type Error = SelectionError;

    fn try_from(ids: Vec<String>) -> Result<Self, Self::Error> {
        if ids.len() > MAX_SELECTION {
            return Err(SelectionError::TooMany(ids.len()));
        }
        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(SelectionError::Duplicate(id.clone()));
            }
        }
        Ok(Self { ids })
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` when present, otherwise appends it while there is room.
    /// A full shortlist is returned unchanged.
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if let Some(position) = ids.iter().position(|existing| existing == id) {
            ids.remove(position);
        } else if ids.len() < MAX_SELECTION {
            ids.push(id.to_string());
        } else {
            debug!(school = id, "shortlist full, ignoring selection");
        }
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    pub fn remaining(&self) -> usize {
        MAX_SELECTION.saturating_sub(self.ids.len())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

pub fn toggle_selection(selection: &Selection, id: &str) -> Selection {
    selection.toggle(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let selection = Selection::new().toggle("collingwood");
        assert!(selection.contains("collingwood"));
        assert_eq!(selection.remaining(), 4);

        let selection = selection.toggle("collingwood");
        assert!(selection.is_empty());
    }

    #[test]
    fn sixth_pick_is_ignored() {
        let full = ["a", "b", "c", "d", "e"]
            .iter()
            .fold(Selection::new(), |selection, id| selection.toggle(id));
        assert!(full.is_full());

        let unchanged = toggle_selection(&full, "f");
        assert_eq!(unchanged, full);
        assert!(!unchanged.contains("f"));
    }

    #[test]
    fn removal_frees_a_slot_and_keeps_order() {
        let selection = ["a", "b", "c", "d", "e"]
            .iter()
            .fold(Selection::new(), |selection, id| selection.toggle(id))
            .toggle("b")
            .toggle("f");

        assert_eq!(selection.ids(), &["a", "c", "d", "e", "f"]);
    }

    #[test]
    fn deserializing_enforces_the_cap() {
        let oversized = serde_json::from_str::<Selection>(r#"["a","b","c","d","e","f","g"]"#);
        assert!(oversized.is_err());

        let repeated = serde_json::from_str::<Selection>(r#"["a","b","a"]"#);
        assert!(repeated.is_err());

        let full: Selection =
            serde_json::from_str(r#"["a","b","c","d","e"]"#).expect("five ids load");
        assert_eq!(full.remaining(), 0);
        assert_eq!(
            serde_json::to_string(&full).expect("serializes"),
            r#"["a","b","c","d","e"]"#
        );
    }

    #[test]
    fn conversion_reports_why_a_list_was_rejected() {
        let ids: Vec<String> = (0..6).map(|i| format!("school-{i}")).collect();
        assert_eq!(Selection::try_from(ids), Err(SelectionError::TooMany(6)));
        assert_eq!(
            Selection::try_from(vec!["x".to_string(), "x".to_string()]),
            Err(SelectionError::Duplicate("x".to_string()))
        );
    }
}

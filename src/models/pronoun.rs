//! Pronoun options and the catalog the menu is built from.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::constants::{BUTTONS_PER_ROW, MAX_ROWS};

/// A single selectable button in the pronoun menu.
///
/// Options are immutable once the catalog is built. The `label` is the exact
/// text inserted into (and searched for in) a member's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounOption {
    /// Unique key used in the button identifier (e.g., "she_they")
    pub id: String,
    /// Display text, also the tag written into the name (e.g., "She/They")
    pub label: String,
    /// Whether clicking this option wipes every tag
    pub is_clear: bool,
}

impl PronounOption {
    /// Creates a regular toggle option.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_clear: false,
        }
    }

    /// Creates the clear-all option.
    pub fn clear(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_clear: true,
        }
    }
}

/// Fixed, ordered set of pronoun options.
///
/// # Validation
///
/// - IDs must be non-empty and unique
/// - Labels must be non-empty; toggle labels must be unique
/// - The catalog must fit in one message (5 rows of 5 buttons)
#[derive(Debug, Clone)]
pub struct Catalog {
    options: Vec<PronounOption>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, failing fast on any malformed or duplicated entry.
    pub fn new(options: Vec<PronounOption>) -> Result<Self> {
        let capacity = BUTTONS_PER_ROW * MAX_ROWS;
        if options.len() > capacity {
            anyhow::bail!(
                "Catalog has {} options but a menu holds at most {}",
                options.len(),
                capacity
            );
        }

        let mut by_id = HashMap::with_capacity(options.len());
        let mut labels: HashSet<&str> = HashSet::new();

        for (index, option) in options.iter().enumerate() {
            if option.id.is_empty() {
                anyhow::bail!("Option at position {index} has an empty ID");
            }
            if option.label.trim().is_empty() {
                anyhow::bail!("Option '{}' has an empty label", option.id);
            }
            if by_id.insert(option.id.clone(), index).is_some() {
                anyhow::bail!("Duplicate option ID '{}'", option.id);
            }
            if !option.is_clear && !labels.insert(option.label.as_str()) {
                anyhow::bail!("Duplicate option label '{}'", option.label);
            }
        }
        drop(labels);

        Ok(Self { options, by_id })
    }

    /// Returns the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            PronounOption::new("he_him", "He/Him"),
            PronounOption::new("she_her", "She/Her"),
            PronounOption::new("they_them", "They/Them"),
            PronounOption::new("it_its", "It/Its"),
            PronounOption::new("any", "Any pronouns"),
            PronounOption::new("ask", "Ask me"),
            PronounOption::new("she_they", "She/They"),
            PronounOption::new("he_they", "He/They"),
            PronounOption::new("ze_hir", "Ze/Hir"),
            PronounOption::new("xe_xem", "Xe/Xem"),
            PronounOption::new("ey_em", "Ey/Em"),
            PronounOption::clear("clear", "Clear pronouns"),
        ])
    }

    /// Looks up an option by its identifier.
    pub fn get(&self, id: &str) -> Option<&PronounOption> {
        self.by_id.get(id).map(|&index| &self.options[index])
    }

    /// Options in display order.
    pub fn options(&self) -> &[PronounOption] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.options()[0].id, "he_him");
        assert_eq!(catalog.get("she_they").unwrap().label, "She/They");
        assert!(catalog.get("clear").unwrap().is_clear);
        assert_eq!(catalog.options().iter().filter(|o| o.is_clear).count(), 1);
    }

    #[test]
    fn test_get_unknown() {
        let catalog = Catalog::builtin().unwrap();

        assert!(catalog.get("they_xe").is_none());
        assert!(catalog.get("").is_none());
        assert!(catalog.get("pronoun_he_him").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            PronounOption::new("a", "A"),
            PronounOption::new("a", "B"),
        ]);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Duplicate option ID"), "{err}");
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = Catalog::new(vec![
            PronounOption::new("a", "Same"),
            PronounOption::new("b", "Same"),
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(Catalog::new(vec![PronounOption::new("", "Label")]).is_err());
        assert!(Catalog::new(vec![PronounOption::new("id", "  ")]).is_err());
    }

    #[test]
    fn test_too_many_options_rejected() {
        let options = (0..26)
            .map(|i| PronounOption::new(format!("id{i}"), format!("Label {i}")))
            .collect();

        assert!(Catalog::new(options).is_err());
    }

    #[test]
    fn test_full_menu_accepted() {
        let options = (0..25)
            .map(|i| PronounOption::new(format!("id{i}"), format!("Label {i}")))
            .collect();

        assert_eq!(Catalog::new(options).unwrap().len(), 25);
    }
}

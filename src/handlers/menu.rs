//! Button menu layout.

use crate::constants::{BUTTONS_PER_ROW, BUTTON_ID_PREFIX, MENU_INSTRUCTIONS};
use crate::models::{Catalog, PronounOption};

/// Visual style of a menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyleHint {
    /// Neutral toggle button
    Secondary,
    /// Destructive action (clear all)
    Danger,
}

/// One clickable button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    /// Identifier echoed back on click (`pronoun_<id>`)
    pub custom_id: String,
    /// Button text
    pub label: String,
    /// Visual style
    pub style: ButtonStyleHint,
}

/// The message posted by the setup command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Instruction text shown above the buttons
    pub content: String,
    /// Button rows in display order, at most five buttons each
    pub rows: Vec<Vec<MenuButton>>,
}

/// Builds the button identifier for an option.
pub fn button_id(option: &PronounOption) -> String {
    format!("{BUTTON_ID_PREFIX}{}", option.id)
}

/// Extracts the option identifier from a button identifier.
///
/// Returns `None` for identifiers this bot did not create.
pub fn option_id(custom_id: &str) -> Option<&str> {
    custom_id.strip_prefix(BUTTON_ID_PREFIX)
}

/// Lays the whole catalog out as rows of buttons.
pub fn build_menu(catalog: &Catalog) -> Menu {
    let rows = catalog
        .options()
        .chunks(BUTTONS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|option| MenuButton {
                    custom_id: button_id(option),
                    label: option.label.clone(),
                    style: if option.is_clear {
                        ButtonStyleHint::Danger
                    } else {
                        ButtonStyleHint::Secondary
                    },
                })
                .collect()
        })
        .collect();

    Menu {
        content: MENU_INSTRUCTIONS.to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_menu_rows() {
        let catalog = Catalog::builtin().unwrap();
        let menu = build_menu(&catalog);

        let sizes: Vec<usize> = menu.rows.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
        assert_eq!(menu.rows[0][0].custom_id, "pronoun_he_him");
        assert_eq!(menu.rows[0][0].label, "He/Him");
    }

    #[test]
    fn test_only_clear_is_danger() {
        let catalog = Catalog::builtin().unwrap();
        let menu = build_menu(&catalog);

        let danger: Vec<&MenuButton> = menu
            .rows
            .iter()
            .flatten()
            .filter(|b| b.style == ButtonStyleHint::Danger)
            .collect();
        assert_eq!(danger.len(), 1);
        assert_eq!(danger[0].custom_id, "pronoun_clear");
    }

    #[test]
    fn test_menu_keeps_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let menu = build_menu(&catalog);

        let labels: Vec<&str> = menu.rows.iter().flatten().map(|b| b.label.as_str()).collect();
        let expected: Vec<&str> = catalog.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_menu_instructions() {
        let menu = build_menu(&Catalog::builtin().unwrap());
        assert!(menu.content.starts_with("Choose your pronouns"));
        assert!(menu.content.contains("Clear pronouns"));
    }

    #[test]
    fn test_option_id() {
        assert_eq!(option_id("pronoun_she_they"), Some("she_they"));
        assert_eq!(option_id("pronoun_"), Some(""));
        assert_eq!(option_id("other_button"), None);
    }
}

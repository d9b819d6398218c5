//! Application-wide constants.
//!
//! This module defines the trigger command, button identifier prefix, audit
//! reasons and every user-facing message the bot sends.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Pronoun Bot";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "pronounbot";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "pronounbot";

/// Environment variable holding the bot token.
pub const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";

/// Exact message content that posts the pronoun menu.
pub const SETUP_COMMAND: &str = "!setup-pronouns";

/// Prefix of every button identifier this bot creates (`pronoun_<id>`).
pub const BUTTON_ID_PREFIX: &str = "pronoun_";

/// Maximum buttons per row the platform accepts.
pub const BUTTONS_PER_ROW: usize = 5;

/// Maximum rows per message the platform accepts.
pub const MAX_ROWS: usize = 5;

/// Separator between tags inside the bracket group.
pub const TAG_SEPARATOR: &str = " / ";

/// Instructions posted above the button menu.
pub const MENU_INSTRUCTIONS: &str = "Choose your pronouns by clicking the buttons below.\n\
    Click again to remove a pronoun.\n\
    Use \"Clear pronouns\" to wipe them all.";

/// Audit log reason for a clear action.
pub const AUDIT_REASON_CLEAR: &str = "Cleared pronouns via pronoun buttons";

/// Audit log reason for a toggle.
pub const AUDIT_REASON_UPDATE: &str = "Updated pronouns via pronoun buttons";

/// Reply when the button identifier is not in the catalog.
pub const MSG_UNKNOWN_OPTION: &str = "Unknown pronoun option.";

/// Reply when the interaction carries no member record.
pub const MSG_MISSING_MEMBER: &str = "Could not find your member data.";

/// Reply when the bot is not allowed to rename the member.
pub const MSG_NOT_RENAMEABLE: &str =
    "I cannot change your nickname (my role is probably too low or you are the server owner).";

/// Reply when renaming failed during a clear action.
pub const MSG_CLEAR_FAILED: &str =
    "Failed to clear your pronouns. I may not have permission or my role is too low.";

/// Reply when renaming failed during a toggle.
pub const MSG_UPDATE_FAILED: &str =
    "Failed to update your nickname. I may not have permission or my role is too low.";

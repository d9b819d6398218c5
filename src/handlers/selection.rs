//! Pronoun button click handler.
//!
//! Every click that carries a `pronoun_` identifier gets exactly one ephemeral
//! reply, whether the rename succeeded or not. The member's current display name
//! is the only state: it is decoded, toggled and re-encoded within a single
//! click. Two rapid clicks by the same member race and the last write wins.

use tracing::{error, info, warn};

use super::{menu, ButtonClick, InteractionResponder};
use crate::constants::{
    AUDIT_REASON_CLEAR, AUDIT_REASON_UPDATE, MSG_CLEAR_FAILED, MSG_MISSING_MEMBER,
    MSG_NOT_RENAMEABLE, MSG_UNKNOWN_OPTION, MSG_UPDATE_FAILED, TAG_SEPARATOR,
};
use crate::models::Catalog;
use crate::parser::{decode, encode};
use crate::services::toggle;

/// Reasons a click could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Identifier not in the catalog
    UnknownOption,
    /// Interaction had no guild member attached
    MissingMember,
    /// Bot is not allowed to rename the member
    NotRenameable,
    /// Rename command was rejected by the platform
    RenameFailed {
        /// Whether the failed click was the clear action
        clear: bool,
    },
}

impl SelectionError {
    /// The reply shown to the clicking member.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::UnknownOption => MSG_UNKNOWN_OPTION,
            Self::MissingMember => MSG_MISSING_MEMBER,
            Self::NotRenameable => MSG_NOT_RENAMEABLE,
            Self::RenameFailed { clear: true } => MSG_CLEAR_FAILED,
            Self::RenameFailed { clear: false } => MSG_UPDATE_FAILED,
        }
    }
}

/// What the click handler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Not one of our buttons; nothing sent
    Ignored,
    /// Nickname updated
    Renamed {
        /// Name written to the platform
        new_name: String,
        /// Tags now in the name
        tags: Vec<String>,
    },
    /// Click rejected; an error reply was sent
    Rejected(SelectionError),
}

/// Reply text after a successful rename.
pub fn success_message(new_name: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        format!("Cleared pronouns. Your display name is now: {new_name}")
    } else {
        format!(
            "Updated pronouns to: {}\nYour display name is now: {new_name}",
            tags.join(TAG_SEPARATOR)
        )
    }
}

/// Handles a button click.
///
/// Identifiers without the `pronoun_` prefix belong to other components and
/// are ignored without a reply. A failed reply is logged; it does not change
/// the returned outcome.
pub async fn handle_button_click<R>(
    catalog: &Catalog,
    click: &ButtonClick,
    responder: &R,
) -> SelectionOutcome
where
    R: InteractionResponder + ?Sized,
{
    let Some(option_id) = menu::option_id(&click.custom_id) else {
        return SelectionOutcome::Ignored;
    };

    let (outcome, reply) = apply_selection(catalog, option_id, click, responder).await;

    if let Err(e) = responder.reply_ephemeral(&reply).await {
        error!(error = %e, "Failed to reply to pronoun button");
    }

    outcome
}

/// Runs the click up to (not including) the reply and returns the reply text.
async fn apply_selection<R>(
    catalog: &Catalog,
    option_id: &str,
    click: &ButtonClick,
    responder: &R,
) -> (SelectionOutcome, String)
where
    R: InteractionResponder + ?Sized,
{
    let Some(option) = catalog.get(option_id) else {
        warn!(option = option_id, "Unknown pronoun option");
        return rejected(SelectionError::UnknownOption);
    };

    let Some(member) = &click.member else {
        warn!(option = option_id, "Button click without member data");
        return rejected(SelectionError::MissingMember);
    };

    if !member.renameable {
        info!(user = %member.user_name, "Member outranks the bot; cannot rename");
        return rejected(SelectionError::NotRenameable);
    }

    let parsed = decode(member.display_name());
    let tags = toggle(&parsed.tags, option);
    let new_name = encode(&parsed.base_name, &tags);
    let reason = if option.is_clear {
        AUDIT_REASON_CLEAR
    } else {
        AUDIT_REASON_UPDATE
    };

    match responder.set_display_name(&new_name, reason).await {
        Ok(()) => {
            info!(
                user = %member.user_name,
                option = option_id,
                new_name = %new_name,
                "Nickname updated"
            );
            let reply = success_message(&new_name, &tags);
            (SelectionOutcome::Renamed { new_name, tags }, reply)
        }
        Err(e) => {
            error!(
                user = %member.user_name,
                option = option_id,
                error = %e,
                "Failed to update nickname"
            );
            rejected(SelectionError::RenameFailed {
                clear: option.is_clear,
            })
        }
    }
}

fn rejected(err: SelectionError) -> (SelectionOutcome, String) {
    (
        SelectionOutcome::Rejected(err),
        err.user_message().to_string(),
    )
}

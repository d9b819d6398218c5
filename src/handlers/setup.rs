//! Setup command handler.

use tracing::{debug, error, info};

use super::{menu, IncomingMessage, SetupChannel};
use crate::constants::SETUP_COMMAND;
use crate::models::Catalog;

/// Result of the best-effort trigger deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Trigger message removed
    Deleted,
    /// Deletion failed; the message stays in the channel
    Failed(String),
}

/// What the setup handler did for a trigger message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    /// Whether the menu message was posted
    pub menu_sent: bool,
    /// Outcome of deleting the trigger
    pub cleanup: CleanupOutcome,
}

/// Returns true if the message is the setup command from a human.
pub fn is_setup_trigger(message: &IncomingMessage) -> bool {
    !message.author_is_bot && message.content.trim() == SETUP_COMMAND
}

/// Handles a channel message.
///
/// Returns `None` for anything that is not the setup command. Otherwise posts
/// the menu and then tries to delete the trigger; neither failure is fatal.
pub async fn handle_message<C>(
    catalog: &Catalog,
    message: &IncomingMessage,
    channel: &C,
) -> Option<SetupOutcome>
where
    C: SetupChannel + ?Sized,
{
    if message.author_is_bot {
        return None;
    }

    debug!(content = %message.content, "Message received");

    if !is_setup_trigger(message) {
        return None;
    }

    info!("Setup command detected");

    let menu_sent = match channel.send_menu(&menu::build_menu(catalog)).await {
        Ok(()) => {
            info!("Pronoun menu sent");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to send pronoun menu");
            false
        }
    };

    let cleanup = delete_trigger(channel).await;

    Some(SetupOutcome { menu_sent, cleanup })
}

/// Deletes the trigger message, reporting rather than propagating failure.
pub async fn delete_trigger<C>(channel: &C) -> CleanupOutcome
where
    C: SetupChannel + ?Sized,
{
    match channel.delete_trigger().await {
        Ok(()) => CleanupOutcome::Deleted,
        Err(e) => {
            debug!(error = %e, "Could not delete setup message");
            CleanupOutcome::Failed(e.to_string())
        }
    }
}

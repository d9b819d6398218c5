//! Event handlers for the pronoun menu.
//!
//! Handlers are platform-neutral: inbound events arrive as plain structs and
//! every outbound command goes through one of the traits below. The gateway
//! adapter implements the traits against the real client; tests implement them
//! with recording fakes.
//!
//! # Flow
//!
//! - Setup message → [`setup::handle_message`] posts the menu and deletes the trigger
//! - Button click → [`selection::handle_button_click`] decodes the current name,
//!   toggles the tag, renames the member and replies once

pub mod menu;
pub mod selection;
pub mod setup;

use anyhow::Result;
use async_trait::async_trait;

pub use menu::{build_menu, ButtonStyleHint, Menu, MenuButton};
pub use selection::{handle_button_click, SelectionError, SelectionOutcome};
pub use setup::{handle_message, CleanupOutcome, SetupOutcome};

/// A message posted in a guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Whether the author is a bot account
    pub author_is_bot: bool,
    /// Raw message text
    pub content: String,
}

/// The clicking member as seen at the time of the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    /// Account user name
    pub user_name: String,
    /// Guild nickname, if one is set
    pub nickname: Option<String>,
    /// Whether the bot may change this member's nickname
    pub renameable: bool,
}

impl MemberSnapshot {
    /// Current display name: the nickname if set, otherwise the user name.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.user_name)
    }
}

/// A button press on one of the bot's components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClick {
    /// Identifier assigned when the button was built
    pub custom_id: String,
    /// Resolved guild member, absent outside guilds
    pub member: Option<MemberSnapshot>,
}

/// Outbound commands available while handling a setup message.
#[async_trait]
pub trait SetupChannel: Send + Sync {
    /// Posts the menu into the channel the trigger came from.
    async fn send_menu(&self, menu: &Menu) -> Result<()>;

    /// Deletes the triggering message.
    async fn delete_trigger(&self) -> Result<()>;
}

/// Outbound commands available while handling a button click.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Sets the clicking member's nickname, recording `reason` in the audit log.
    async fn set_display_name(&self, new_name: &str, reason: &str) -> Result<()>;

    /// Replies to the interaction, visible only to the clicking member.
    async fn reply_ephemeral(&self, text: &str) -> Result<()>;
}

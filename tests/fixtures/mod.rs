//! Shared test fixtures for handler flow tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use pronounbot::handlers::{
    ButtonClick, IncomingMessage, InteractionResponder, MemberSnapshot, Menu, SetupChannel,
};

/// Records every command sent to a fake interaction.
#[derive(Default)]
pub struct FakeInteraction {
    /// Fail `set_display_name` with this message
    pub rename_error: Option<String>,
    /// Fail `reply_ephemeral` with this message
    pub reply_error: Option<String>,
    /// (new_name, reason) per rename call
    pub renames: Mutex<Vec<(String, String)>>,
    /// Reply texts in call order
    pub replies: Mutex<Vec<String>>,
}

impl FakeInteraction {
    /// A fake whose rename command is rejected.
    pub fn failing_rename() -> Self {
        Self {
            rename_error: Some("Missing Permissions".to_string()),
            ..Self::default()
        }
    }

    /// Recorded renames.
    pub fn renames(&self) -> Vec<(String, String)> {
        self.renames.lock().unwrap().clone()
    }

    /// Recorded replies.
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionResponder for FakeInteraction {
    async fn set_display_name(&self, new_name: &str, reason: &str) -> Result<()> {
        if let Some(message) = &self.rename_error {
            anyhow::bail!("{message}");
        }
        self.renames
            .lock()
            .unwrap()
            .push((new_name.to_string(), reason.to_string()));
        Ok(())
    }

    async fn reply_ephemeral(&self, text: &str) -> Result<()> {
        self.replies.lock().unwrap().push(text.to_string());
        if let Some(message) = &self.reply_error {
            anyhow::bail!("{message}");
        }
        Ok(())
    }
}

/// Records every command sent to a fake channel.
#[derive(Default)]
pub struct FakeChannel {
    /// Fail `send_menu`
    pub send_fails: bool,
    /// Fail `delete_trigger`
    pub delete_fails: bool,
    /// Menus posted
    pub menus: Mutex<Vec<Menu>>,
    /// Number of delete attempts
    pub delete_attempts: Mutex<usize>,
}

impl FakeChannel {
    /// Recorded menus.
    pub fn menus(&self) -> Vec<Menu> {
        self.menus.lock().unwrap().clone()
    }

    /// Recorded delete attempts.
    pub fn delete_attempts(&self) -> usize {
        *self.delete_attempts.lock().unwrap()
    }
}

#[async_trait]
impl SetupChannel for FakeChannel {
    async fn send_menu(&self, menu: &Menu) -> Result<()> {
        if self.send_fails {
            anyhow::bail!("Missing Access");
        }
        self.menus.lock().unwrap().push(menu.clone());
        Ok(())
    }

    async fn delete_trigger(&self) -> Result<()> {
        *self.delete_attempts.lock().unwrap() += 1;
        if self.delete_fails {
            anyhow::bail!("Missing Permissions");
        }
        Ok(())
    }
}

/// A renameable member with the given nickname.
pub fn member_named(nickname: &str) -> MemberSnapshot {
    MemberSnapshot {
        user_name: "cricket".to_string(),
        nickname: Some(nickname.to_string()),
        renameable: true,
    }
}

/// A click on `pronoun_<option_id>` by `member`.
pub fn click(option_id: &str, member: Option<MemberSnapshot>) -> ButtonClick {
    ButtonClick {
        custom_id: format!("pronoun_{option_id}"),
        member,
    }
}

/// A message from a human author.
pub fn human_message(content: &str) -> IncomingMessage {
    IncomingMessage {
        author_is_bot: false,
        content: content.to_string(),
    }
}

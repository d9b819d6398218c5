//! Discord gateway adapter.
//!
//! Connects the platform-neutral handlers to serenity: inbound gateway events
//! are converted into [`IncomingMessage`] / [`ButtonClick`], and the handler
//! traits are implemented on thin wrappers around the serenity context.
//!
//! Renameability is computed from the guild cache at click time, just before
//! the read-modify-write of the nickname.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::all::{
    ButtonStyle, Client, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, EditMember,
    EventHandler, GatewayIntents, GuildId, Interaction, Member, Message, Permissions, Ready,
    RoleId,
};
use tracing::{debug, info, warn};

use crate::handlers::{
    self, ButtonClick, ButtonStyleHint, IncomingMessage, InteractionResponder, MemberSnapshot,
    Menu, SetupChannel,
};
use crate::models::Catalog;
use crate::services::permissions::{can_rename, top_position, BotRank, MemberRank};

/// Intents the bot needs: guild cache, members, and message content.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Logs in and processes gateway events until the connection ends.
pub async fn run(token: &str, catalog: Catalog) -> Result<()> {
    let mut client = Client::builder(token, intents())
        .event_handler(PronounHandler::new(catalog))
        .await
        .context("Failed to create gateway client")?;

    client.start().await.context("Gateway connection failed")?;

    Ok(())
}

/// Serenity event handler owning the catalog.
pub struct PronounHandler {
    catalog: Arc<Catalog>,
}

impl PronounHandler {
    /// Creates a handler for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait]
impl EventHandler for PronounHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Logged in");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = IncomingMessage {
            author_is_bot: msg.author.bot,
            content: msg.content.clone(),
        };
        let channel = ChannelAdapter {
            ctx: &ctx,
            message: &msg,
        };

        if let Some(outcome) = handlers::handle_message(&self.catalog, &incoming, &channel).await {
            debug!(?outcome, "Setup handled");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };

        let click = ButtonClick {
            custom_id: component.data.custom_id.clone(),
            member: component
                .member
                .as_ref()
                .map(|member| member_snapshot(&ctx, member)),
        };
        let responder = InteractionAdapter {
            ctx: &ctx,
            component: &component,
        };

        let outcome = handlers::handle_button_click(&self.catalog, &click, &responder).await;
        debug!(?outcome, "Button click handled");
    }
}

/// Channel commands for one setup message.
struct ChannelAdapter<'a> {
    ctx: &'a Context,
    message: &'a Message,
}

#[async_trait]
impl SetupChannel for ChannelAdapter<'_> {
    async fn send_menu(&self, menu: &Menu) -> Result<()> {
        let builder = CreateMessage::new()
            .content(menu.content.clone())
            .components(action_rows(menu));

        self.message
            .channel_id
            .send_message(&self.ctx.http, builder)
            .await?;
        Ok(())
    }

    async fn delete_trigger(&self) -> Result<()> {
        self.message.delete(&self.ctx.http).await?;
        Ok(())
    }
}

/// Interaction commands for one button click.
struct InteractionAdapter<'a> {
    ctx: &'a Context,
    component: &'a ComponentInteraction,
}

#[async_trait]
impl InteractionResponder for InteractionAdapter<'_> {
    async fn set_display_name(&self, new_name: &str, reason: &str) -> Result<()> {
        let guild_id: GuildId = self
            .component
            .guild_id
            .context("Interaction did not come from a guild")?;

        let builder = EditMember::new()
            .nickname(new_name)
            .audit_log_reason(reason);

        guild_id
            .edit_member(&self.ctx.http, self.component.user.id, builder)
            .await?;
        Ok(())
    }

    async fn reply_ephemeral(&self, text: &str) -> Result<()> {
        let message = CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true);

        self.component
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }
}

/// Converts the menu layout into serenity action rows.
fn action_rows(menu: &Menu) -> Vec<CreateActionRow> {
    menu.rows
        .iter()
        .map(|row| {
            CreateActionRow::Buttons(
                row.iter()
                    .map(|button| {
                        CreateButton::new(button.custom_id.clone())
                            .label(button.label.clone())
                            .style(button_style(button.style))
                    })
                    .collect(),
            )
        })
        .collect()
}

fn button_style(hint: ButtonStyleHint) -> ButtonStyle {
    match hint {
        ButtonStyleHint::Secondary => ButtonStyle::Secondary,
        ButtonStyleHint::Danger => ButtonStyle::Danger,
    }
}

fn member_snapshot(ctx: &Context, member: &Member) -> MemberSnapshot {
    MemberSnapshot {
        user_name: member.user.name.clone(),
        nickname: member.nick.clone(),
        renameable: is_renameable(ctx, member),
    }
}

/// Evaluates the nickname privilege rule from the guild cache.
///
/// An uncached guild or bot member counts as not renameable.
fn is_renameable(ctx: &Context, member: &Member) -> bool {
    let bot_id = ctx.cache.current_user().id;

    let Some(guild) = ctx.cache.guild(member.guild_id) else {
        warn!(guild = %member.guild_id, "Guild not in cache");
        return false;
    };
    let Some(bot_member) = guild.members.get(&bot_id) else {
        warn!(guild = %member.guild_id, "Bot member not in cache");
        return false;
    };

    let role_position = |id: &RoleId| guild.roles.get(id).map(|role| role.position);

    // @everyone shares the guild's ID
    let mut permissions = guild
        .roles
        .get(&RoleId::new(guild.id.get()))
        .map_or_else(Permissions::empty, |role| role.permissions);
    for role in bot_member.roles.iter().filter_map(|id| guild.roles.get(id)) {
        permissions |= role.permissions;
    }

    let bot = BotRank {
        top_role_position: top_position(bot_member.roles.iter().filter_map(role_position)),
        can_manage_nicknames: permissions.administrator() || permissions.manage_nicknames(),
    };
    let target = MemberRank {
        top_role_position: top_position(member.roles.iter().filter_map(role_position)),
        is_owner: guild.owner_id == member.user.id,
    };

    can_rename(bot, target, member.user.id == bot_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_style_mapping() {
        assert_eq!(button_style(ButtonStyleHint::Secondary), ButtonStyle::Secondary);
        assert_eq!(button_style(ButtonStyleHint::Danger), ButtonStyle::Danger);
    }

    #[test]
    fn test_action_rows_match_menu() {
        let menu = handlers::build_menu(&Catalog::builtin().unwrap());
        assert_eq!(action_rows(&menu).len(), menu.rows.len());
    }

    #[test]
    fn test_intents_include_message_content() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
    }
}

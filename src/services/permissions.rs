//! Nickname privilege checks.
//!
//! The platform only lets a bot rename members that sit strictly below the
//! bot's highest role, never the guild owner, and only with the
//! "manage nicknames" permission. The gateway collects the raw role data; the
//! decision itself lives here so it can be tested without a connection.

/// Role facts about one guild member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberRank {
    /// Highest role position held (0 for members with only @everyone)
    pub top_role_position: u16,
    /// Whether this member owns the guild
    pub is_owner: bool,
}

/// Role facts about the bot's own member record in the guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotRank {
    /// Highest role position held by the bot
    pub top_role_position: u16,
    /// Whether the bot holds manage-nicknames (or administrator)
    pub can_manage_nicknames: bool,
}

/// Returns true if the bot may change `target`'s nickname.
///
/// `target_is_bot` covers the bot renaming itself, which only needs the
/// permission and not the hierarchy check.
pub fn can_rename(bot: BotRank, target: MemberRank, target_is_bot: bool) -> bool {
    if !bot.can_manage_nicknames || target.is_owner {
        return false;
    }
    if target_is_bot {
        return true;
    }
    bot.top_role_position > target.top_role_position
}

/// Highest position among the given role positions, or 0 if none.
pub fn top_position(positions: impl IntoIterator<Item = u16>) -> u16 {
    positions.into_iter().max().unwrap_or(0)
}

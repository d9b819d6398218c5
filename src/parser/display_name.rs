//! Display name parsing and rendering.
//!
//! Pronoun tags live in a trailing group at the end of a member's display name:
//!
//! ```text
//! Cricket [She/They / Xe/Xem]
//! Cricket (She/They / Xe/Xem)   <- legacy style, still accepted
//! ```
//!
//! Decoding accepts both bracket styles. Encoding always writes square brackets,
//! so any name the bot touches is normalized to the current style.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::TAG_SEPARATOR;

/// A display name split into its base and its ordered tag list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    /// Name text before the tag group, trimmed
    pub base_name: String,
    /// Tags in display order
    pub tags: Vec<String>,
}

impl ParsedName {
    /// Renders the name back into display form.
    pub fn render(&self) -> String {
        encode(&self.base_name, &self.tags)
    }
}

/// Matches `<base> [<tags>]` or `<base> (<tags>)` anchored at the end.
///
/// Exactly one space separates the base from the group. The base is lazy so the
/// group starts at the first candidate that still reaches the end of the string.
fn tag_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?) [\[(](.*)[)\]]$").expect("tag group regex"))
}

/// Splits a display name into base name and tags.
///
/// Never fails: input without a trailing group yields the trimmed input and no
/// tags. Empty parts are dropped; duplicates are kept as found.
///
/// # Examples
///
/// ```
/// use pronounbot::parser::decode;
///
/// let parsed = decode("Cricket (She/They / Xe/Xem)");
/// assert_eq!(parsed.base_name, "Cricket");
/// assert_eq!(parsed.tags, vec!["She/They", "Xe/Xem"]);
/// ```
pub fn decode(display_name: &str) -> ParsedName {
    let Some(caps) = tag_group_re().captures(display_name) else {
        return ParsedName {
            base_name: display_name.trim().to_string(),
            tags: Vec::new(),
        };
    };

    let base_name = caps[1].trim().to_string();
    let interior = caps[2].trim();

    let tags = if interior.is_empty() {
        Vec::new()
    } else {
        interior
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    };

    ParsedName { base_name, tags }
}

/// Renders a base name and tags into a display name.
///
/// No group is written for an empty tag list. Length limits are left to the
/// platform.
pub fn encode(base_name: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return base_name.to_string();
    }
    format!("{} [{}]", base_name, tags.join(TAG_SEPARATOR))
}

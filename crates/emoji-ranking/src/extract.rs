//! Emoji extraction from a single message.

use std::sync::LazyLock;

use regex::Regex;
use slack_client::Message;

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":[A-Za-z0-9_]+:").unwrap());

/// One emoji occurrence and how much it adds to the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiIncrement {
    /// Canonical `:name:` form.
    pub token: String,
    pub amount: u64,
}

/// Canonical token for an emoji name (`fire` -> `:fire:`).
pub fn emoji_token(name: &str) -> String {
    format!(":{name}:")
}

/// Collect every emoji occurrence in `message`.
///
/// Each `:word:` in the text adds 1. Each reaction adds its full count.
/// Text and reactions are independent, so the same emoji in both counts twice.
pub fn extract(message: &Message) -> Vec<EmojiIncrement> {
    let text_hits = RE_EMOJI.find_iter(message.text()).map(|m| EmojiIncrement {
        token: m.as_str().to_string(),
        amount: 1,
    });

    let reaction_hits = message.reactions().iter().map(|r| EmojiIncrement {
        token: emoji_token(&r.name),
        amount: r.count,
    });

    text_hits.chain(reaction_hits).collect()
}

#[cfg(test)]
mod tests {
    use slack_client::Reaction;

    use super::*;

    fn message(text: Option<&str>, reactions: &[(&str, u64)]) -> Message {
        Message {
            text: text.map(str::to_string),
            reactions: if reactions.is_empty() {
                None
            } else {
                Some(
                    reactions
                        .iter()
                        .map(|(name, count)| Reaction {
                            name: name.to_string(),
                            count: *count,
                            users: Vec::new(),
                        })
                        .collect(),
                )
            },
            ..Message::default()
        }
    }

    fn inc(token: &str, amount: u64) -> EmojiIncrement {
        EmojiIncrement {
            token: token.into(),
            amount,
        }
    }

    #[test]
    fn empty_message_yields_nothing() {
        assert!(extract(&message(None, &[])).is_empty());
        assert!(extract(&message(Some(""), &[])).is_empty());
    }

    #[test]
    fn duplicate_text_tokens_count_separately() {
        let got = extract(&message(Some("hi :smile: :smile:"), &[]));
        assert_eq!(got, vec![inc(":smile:", 1), inc(":smile:", 1)]);
    }

    #[test]
    fn reaction_adds_full_count() {
        let got = extract(&message(None, &[("fire", 5)]));
        assert_eq!(got, vec![inc(":fire:", 5)]);
    }

    #[test]
    fn text_and_reaction_are_not_deduplicated() {
        let got = extract(&message(Some("great :tada:"), &[("tada", 2)]));
        assert_eq!(got, vec![inc(":tada:", 1), inc(":tada:", 2)]);
    }

    #[test]
    fn word_characters_only() {
        let got = extract(&message(
            Some(":thumbs_up: :+1: :skin-tone-2: :a1_B2: ::"),
            &[],
        ));
        let tokens: Vec<_> = got.iter().map(|i| i.token.as_str()).collect();
        assert_eq!(tokens, vec![":thumbs_up:", ":a1_B2:"]);
    }

    #[test]
    fn adjacent_markers_do_not_overlap() {
        // The closing colon of the first match is consumed.
        let got = extract(&message(Some(":a:b:c:"), &[]));
        let tokens: Vec<_> = got.iter().map(|i| i.token.as_str()).collect();
        assert_eq!(tokens, vec![":a:", ":c:"]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let msg = message(Some(":wave: hello :wave:"), &[("wave", 3), ("eyes", 1)]);
        assert_eq!(extract(&msg), extract(&msg));
    }
}

//! Classifying raw chat text into commands and free-form input.

use crate::event::EventKind;

/// Bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: begin or restart the conversation.
    Start,

    /// Any other slash command, or one addressed to another bot. Ignored.
    Unknown {
        /// Command name without the slash or bot mention.
        name: String,
    },
}

/// Classify a text message.
///
/// Messages starting with `/` are commands. Anything else is free-form text,
/// passed through untrimmed.
///
/// `bot` is this bot's username. A command mentioning a different bot
/// (`/start@OtherBot`) is `Unknown`; the comparison ignores ASCII case and a
/// leading `@`. With no username every mention is accepted.
pub fn parse(input: &str, bot: Option<&str>) -> EventKind {
    let Some(cmd_str) = input.trim_start().strip_prefix('/') else {
        return EventKind::Text(input.to_owned());
    };

    let word = cmd_str.split_whitespace().next().unwrap_or("");
    let (name, mention) = match word.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (word, None),
    };

    let addressed = match (mention, bot) {
        (Some(mention), Some(bot)) => mention.eq_ignore_ascii_case(bot.trim_start_matches('@')),
        _ => true,
    };

    match name {
        "start" if addressed => EventKind::Command(Command::Start),
        _ => EventKind::Command(Command::Unknown { name: name.to_owned() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: Option<&str> = Some("DipSwitchBot");

    fn unknown(name: &str) -> EventKind {
        EventKind::Command(Command::Unknown { name: name.into() })
    }

    #[test]
    fn parse_start() {
        assert_eq!(parse("/start", BOT), EventKind::Command(Command::Start));
        assert_eq!(parse("  /start  ", BOT), EventKind::Command(Command::Start));
        assert_eq!(parse("/start", None), EventKind::Command(Command::Start));
    }

    #[test]
    fn parse_start_with_own_mention() {
        assert_eq!(parse("/start@DipSwitchBot", BOT), EventKind::Command(Command::Start));
        assert_eq!(parse("/start@dipswitchbot", BOT), EventKind::Command(Command::Start));
        assert_eq!(parse("/start@DipSwitchBot", Some("@DipSwitchBot")), EventKind::Command(Command::Start));
    }

    #[test]
    fn parse_start_for_other_bot() {
        assert_eq!(parse("/start@SomeOtherBot", BOT), unknown("start"));
        assert_eq!(parse("/start@", BOT), unknown("start"));
    }

    #[test]
    fn parse_mention_without_username() {
        assert_eq!(parse("/start@SomeOtherBot", None), EventKind::Command(Command::Start));
    }

    #[test]
    fn parse_start_with_argument() {
        assert_eq!(parse("/start deep-link", BOT), EventKind::Command(Command::Start));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(parse("/help", BOT), unknown("help"));
        assert_eq!(parse("/help@DipSwitchBot", BOT), unknown("help"));
        assert_eq!(parse("/", BOT), unknown(""));
    }

    #[test]
    fn parse_text() {
        assert_eq!(parse("42", BOT), EventKind::Text("42".into()));
        assert_eq!(parse(" 42 ", BOT), EventKind::Text(" 42 ".into()));
        assert_eq!(parse("-1", BOT), EventKind::Text("-1".into()));
    }
}

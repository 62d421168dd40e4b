//! Slash-command parsing: `/name[@bot] arg1 arg2`.

/// A parsed bot command. `name` is lower-case without the leading slash or `@bot` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Bot username from a `/name@bot` suffix, as written.
    pub target: Option<String>,
    pub args: Vec<String>,
}

impl Command {
    /// Parses message text into a command; returns `None` when the text is not a command.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let head = parts.next()?.strip_prefix('/')?;
        let (name, target) = match head.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (head, None),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        if target.is_some_and(str::is_empty) {
            return None;
        }
        Some(Self {
            name: name.to_ascii_lowercase(),
            target: target.map(str::to_string),
            args: parts.map(str::to_string).collect(),
        })
    }

    /// True unless the command carries an `@bot` suffix naming a different bot.
    pub fn is_addressed_to(&self, bot_username: &str) -> bool {
        let bot_username = bot_username.trim_start_matches('@');
        self.target
            .as_deref()
            .map_or(true, |target| target.eq_ignore_ascii_case(bot_username))
    }

    /// First argument, if any (e.g. the referral code in `/start CODE`).
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_command() {
        let cmd = Command::parse("/help").unwrap();
        assert_eq!(cmd.name, "help");
        assert_eq!(cmd.target, None);
        assert!(cmd.args.is_empty());
        assert_eq!(cmd.first_arg(), None);
    }

    #[test]
    fn parses_args_and_bot_suffix() {
        let cmd = Command::parse("  /Start@LuxuryTrendBot   LUXAB12CD34  extra ").unwrap();
        assert_eq!(cmd.name, "start");
        assert_eq!(cmd.target.as_deref(), Some("LuxuryTrendBot"));
        assert_eq!(cmd.args, vec!["LUXAB12CD34", "extra"]);
        assert_eq!(cmd.first_arg(), Some("LUXAB12CD34"));
    }

    #[test]
    fn ignores_non_commands() {
        assert!(Command::parse("hello").is_none());
        assert!(Command::parse("").is_none());
        assert!(Command::parse("/").is_none());
        assert!(Command::parse("/@bot").is_none());
        assert!(Command::parse("/wh-at").is_none());
        assert!(Command::parse("/help@").is_none());
    }

    #[test]
    fn checks_bot_suffix_against_username() {
        let plain = Command::parse("/help").unwrap();
        assert!(plain.is_addressed_to("LuxuryTrendBot"));

        let ours = Command::parse("/help@luxurytrendbot").unwrap();
        assert!(ours.is_addressed_to("LuxuryTrendBot"));

        let other = Command::parse("/help@SomeOtherBot").unwrap();
        assert_eq!(other.name, "help");
        assert!(!other.is_addressed_to("LuxuryTrendBot"));
    }
}

//! Where outgoing messages go: a numeric chat id or a public `@username`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

/// Target of an outgoing message. Channels are usually configured as `@name`; private chats by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Id(i64),
    /// Stored with the leading `@`.
    Username(String),
}

impl FromStr for Destination {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BotError::Config("empty chat destination".to_string()));
        }
        if let Ok(id) = s.parse::<i64>() {
            return Ok(Destination::Id(id));
        }
        let name = s.strip_prefix('@').unwrap_or(s);
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(BotError::Config(format!("invalid chat destination: {}", s)));
        }
        Ok(Destination::Username(format!("@{}", name)))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Id(id) => write!(f, "{}", id),
            Destination::Username(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Destination {
    fn from(id: i64) -> Self {
        Destination::Id(id)
    }
}

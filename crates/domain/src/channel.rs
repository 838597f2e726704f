use std::fmt::Display;

/// A notification transport. Each variant is backed by a separate external
/// provider configured in the infra layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
    Whatsapp,
}

impl Channel {
    /// Dispatch order within a tick is fixed.
    pub fn all() -> [Channel; 3] {
        [Channel::Email, Channel::Sms, Channel::Whatsapp]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Whatsapp => "whatsapp",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

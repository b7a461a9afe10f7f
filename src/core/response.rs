//! Chat response formatting
//!
//! Whisper routing and error styling for messages sent back to the table.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Whisper prefixing, GM marker stripping and error spans

/// Whisper target used for GM-only messages
pub const GM_RECIPIENT: &str = "gm";

/// Marker the host appends to the sender label of a GM
const GM_MARKER: &str = " (GM)";

/// Who gets to see a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Whispered to the GM only
    Gm,
    /// Visible to everyone at the table
    Everyone,
    /// Whispered to the named player or character
    Player(String),
}

impl Recipient {
    /// Prefix `message` with the whisper command for this recipient
    pub fn address(&self, message: &str) -> String {
        match self {
            Recipient::Gm => format!("/w \"{GM_RECIPIENT}\" {message}"),
            Recipient::Everyone => message.to_string(),
            Recipient::Player(name) => format!("/w \"{name}\" {message}"),
        }
    }
}

/// Wrap an error message in the red, bold span used for all error feedback
pub fn error_span(message: &str) -> String {
    format!("<span style=\"color: red; font-weight: bold;\">{message}</span>")
}

/// Remove the host's GM marker from a sender label so it can be whispered to
pub fn strip_gm_marker(who: &str) -> String {
    who.replace(GM_MARKER, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gm_whisper() {
        assert_eq!(Recipient::Gm.address("hi"), "/w \"gm\" hi");
    }

    #[test]
    fn test_player_whisper() {
        let to = Recipient::Player("Aria".to_string());
        assert_eq!(to.address("hello"), "/w \"Aria\" hello");
    }

    #[test]
    fn test_broadcast_is_unprefixed() {
        assert_eq!(Recipient::Everyone.address("hello all"), "hello all");
    }

    #[test]
    fn test_error_span() {
        assert_eq!(
            error_span("oops"),
            "<span style=\"color: red; font-weight: bold;\">oops</span>"
        );
    }

    #[test]
    fn test_strip_gm_marker() {
        assert_eq!(strip_gm_marker("Sam (GM)"), "Sam");
        assert_eq!(strip_gm_marker("Sam"), "Sam");
    }
}

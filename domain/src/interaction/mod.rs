//! Classification of raw user input lines.
//!
//! The chat loop reads one line at a time. A line is either the exit
//! sentinel, blank, or a message to forward to the assistant. Only the
//! line terminator is stripped; a message is sent exactly as typed.
//!
//! # Examples
//!
//! ```
//! use chat_domain::UserInput;
//!
//! assert_eq!(UserInput::parse("EXIT"), UserInput::Exit);
//! assert_eq!(UserInput::parse("   "), UserInput::Blank);
//! assert_eq!(
//!     UserInput::parse(" hello "),
//!     UserInput::Message(" hello ".to_string())
//! );
//! ```

/// Literal that ends the chat loop, compared case-insensitively.
pub const EXIT_SENTINEL: &str = "exit";

/// A classified line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Terminate the loop. No remote calls are made.
    Exit,
    /// Nothing to send.
    Blank,
    /// Text to forward as a user message.
    Message(String),
}

impl UserInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
            UserInput::Exit
        } else if line.trim().is_empty() {
            UserInput::Blank
        } else {
            UserInput::Message(line.to_string())
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, UserInput::Exit)
    }
}

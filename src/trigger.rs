//! Completion triggers.
//!
//! A trigger decides, from the text of the current line up to the cursor,
//! whether a completion query should run and with which prefix. Word
//! characters are ASCII letters, digits and `_`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing run of word characters; always matches, possibly empty.
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]*$").expect("word-run pattern is valid"));

/// Rule for extracting the typed prefix from the text before the cursor.
#[derive(Debug, Clone)]
pub enum TriggerPolicy {
    /// Fires only when the line ends with `\<command>{` plus word characters.
    Command {
        /// Command name, without the leading backslash
        command: String,
        /// Compiled `\<command>{(word*)$` matcher
        pattern: Regex,
    },

    /// Fires on every line; the prefix is the trailing word run.
    WordRun,
}

impl TriggerPolicy {
    /// Creates a command trigger for `\<command>{`.
    pub fn command(command: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"\\{}\{{([A-Za-z0-9_]*)$",
            regex::escape(command)
        ))?;

        Ok(Self::Command {
            command: command.to_string(),
            pattern,
        })
    }

    /// Extracts the prefix typed so far, or `None` if the trigger does not fire.
    ///
    /// ```
    /// use symdex_lib::trigger::TriggerPolicy;
    ///
    /// let trigger = TriggerPolicy::command("sr").unwrap();
    /// assert_eq!(trigger.prefix_at_cursor(r"see \sr{empt"), Some("empt"));
    /// assert_eq!(trigger.prefix_at_cursor("see empt"), None);
    /// assert_eq!(TriggerPolicy::WordRun.prefix_at_cursor("see empt"), Some("empt"));
    /// ```
    pub fn prefix_at_cursor<'a>(&self, line_prefix: &'a str) -> Option<&'a str> {
        match self {
            Self::Command { pattern, .. } => pattern
                .captures(line_prefix)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            Self::WordRun => WORD_RUN.find(line_prefix).map(|m| m.as_str()),
        }
    }
}

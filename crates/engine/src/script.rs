//! Command scripts
//!
//! One command per line, optionally followed by a repeat count:
//!
//! ```text
//! # drop the first piece on the left wall
//! tick
//! left 5
//! drop
//! ```
//!
//! Blank lines and `#` comments are ignored.

use thiserror::Error;

use crate::types::Command;

/// Errors found while parsing a script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },

    #[error("line {line}: invalid repeat count '{count}'")]
    InvalidCount { line: usize, count: String },

    #[error("line {line}: unexpected trailing input '{rest}'")]
    TrailingInput { line: usize, rest: String },
}

pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let mut words = content.split_whitespace();
        let Some(word) = words.next() else {
            continue;
        };
        let command = Command::from_str(word).ok_or_else(|| ScriptError::UnknownCommand {
            line,
            word: word.to_string(),
        })?;

        let repeat = match words.next() {
            Some(count) => count.parse::<usize>().map_err(|_| ScriptError::InvalidCount {
                line,
                count: count.to_string(),
            })?,
            None => 1,
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ScriptError::TrailingInput {
                line,
                rest: rest.join(" "),
            });
        }

        commands.extend(std::iter::repeat(command).take(repeat));
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_keys_and_counts() {
        let script = "tick\n  a 2 \n# comment\n\nrotate # trailing comment\nspace\n";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![
                Command::Tick,
                Command::MoveLeft,
                Command::MoveLeft,
                Command::Rotate,
                Command::HardDrop,
            ]
        );
    }

    #[test]
    fn zero_count_skips_command() {
        assert_eq!(parse_script("tick 0\nright").unwrap(), vec![Command::MoveRight]);
    }

    #[test]
    fn reports_line_numbers() {
        assert_eq!(
            parse_script("tick\njump"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                word: "jump".to_string()
            })
        );
        assert_eq!(
            parse_script("left x"),
            Err(ScriptError::InvalidCount {
                line: 1,
                count: "x".to_string()
            })
        );
        assert!(matches!(
            parse_script("left 1 2"),
            Err(ScriptError::TrailingInput { line: 1, .. })
        ));
    }
}

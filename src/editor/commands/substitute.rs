// src/editor/commands/substitute.rs

use clap::Parser;
use regex::Regex;

use crate::{
    core::{
        command::Command,
        error::{CommandError, Result},
        registry,
    },
    editor::commands::commons,
    models::Buffer,
};

const NAME: &str = "substitute";

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    about = "Replaces every match of a regular expression within one line."
)]
struct SubstituteArgs {
    /// Line number to edit (1-based).
    line: usize,

    /// Regular expression to search for.
    #[arg(value_parser = Regex::new, allow_hyphen_values = true)]
    pattern: Regex,

    /// Replacement text. `$1` / `${name}` refer to capture groups.
    #[arg(allow_hyphen_values = true, default_value = "")]
    replacement: String,
}

#[derive(Debug)]
pub struct Substitute {
    line: usize,
    pattern: Regex,
    replacement: String,
    previous: Option<(usize, String)>,
}

impl Substitute {
    pub fn new(line: usize, pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            line,
            pattern,
            replacement: replacement.into(),
            previous: None,
        }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: SubstituteArgs = registry::parse_args(NAME, args)?;
        Ok(Box::new(Self::new(
            parsed.line,
            parsed.pattern,
            parsed.replacement,
        )))
    }
}

impl Command<Buffer> for Substitute {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!(
            "substitute /{}/ with {} on line {}",
            self.pattern.as_str(),
            commons::preview(&self.replacement),
            self.line
        )
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        let at = commons::existing_line(NAME, target, self.line)?;
        let current = target.line(at).unwrap_or_default();
        if !self.pattern.is_match(current) {
            return Err(CommandError::execution(
                NAME,
                format!("/{}/ does not match line {}", self.pattern.as_str(), self.line),
            ));
        }
        let updated = self
            .pattern
            .replace_all(current, self.replacement.as_str())
            .into_owned();
        let old = target
            .replace_line(at, updated)
            .ok_or_else(|| CommandError::execution(NAME, format!("line {} vanished", self.line)))?;
        self.previous = Some((at, old));
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let (at, old) = self
            .previous
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        target
            .replace_line(at, old)
            .ok_or_else(|| CommandError::undo(NAME, format!("line {} is gone", at + 1)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::args;

    #[test]
    fn test_substitute_all_matches_and_undo() {
        // --- Setup ---
        let mut buffer = Buffer::from_text("cat and cat\ndog");
        let mut command = Substitute::create(&args(&["1", "cat", "bird"])).unwrap();

        // --- Execute ---
        command.execute(&mut buffer).unwrap();

        // --- Assert ---
        assert_eq!(buffer.lines(), ["bird and bird", "dog"]);
        command.undo(&mut buffer).unwrap();
        assert_eq!(buffer.lines(), ["cat and cat", "dog"]);
    }

    #[test]
    fn test_capture_groups_in_replacement() {
        let mut buffer = Buffer::from_text("2024-06-01");
        let mut command =
            Substitute::create(&args(&["1", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1"])).unwrap();

        command.execute(&mut buffer).unwrap();

        assert_eq!(buffer.lines(), ["01/06/2024"]);
    }

    #[test]
    fn test_no_match_is_an_execution_error() {
        let mut buffer = Buffer::from_text("hello");
        let mut command = Substitute::create(&args(&["1", "bye", "x"])).unwrap();

        assert!(matches!(
            command.execute(&mut buffer),
            Err(CommandError::Execution { .. })
        ));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_missing_replacement_deletes_matches() {
        let mut buffer = Buffer::from_text("a  b");
        let mut command = Substitute::create(&args(&["1", r"\s+"])).unwrap();

        command.execute(&mut buffer).unwrap();

        assert_eq!(buffer.lines(), ["ab"]);
    }

    #[test]
    fn test_invalid_regex_is_invalid_argument() {
        assert!(matches!(
            Substitute::create(&args(&["1", "(unclosed", "x"])),
            Err(CommandError::InvalidArguments { .. })
        ));
    }
}

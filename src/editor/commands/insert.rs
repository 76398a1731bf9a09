// src/editor/commands/insert.rs

use clap::Parser;

use crate::{
    core::{
        command::Command,
        error::{CommandError, Result},
        registry,
    },
    editor::commands::commons,
    models::Buffer,
};

const NAME: &str = "insert";

// --- Command Argument Parsing ---

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Inserts a line before the given line number.")]
struct InsertArgs {
    /// Line number to insert before (1-based). One past the last line appends.
    line: usize,

    /// Text of the new line. Remaining words are joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

// --- Command ---

#[derive(Debug)]
pub struct InsertLine {
    line: usize,
    text: String,
    inserted_at: Option<usize>,
}

impl InsertLine {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
            inserted_at: None,
        }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: InsertArgs = registry::parse_args(NAME, &commons::verbatim(args))?;
        Ok(Box::new(Self::new(
            parsed.line,
            commons::join_words(&parsed.text),
        )))
    }
}

impl Command<Buffer> for InsertLine {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!("insert at line {}: {}", self.line, commons::preview(&self.text))
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        let at = self.line.saturating_sub(1);
        if self.line == 0 || !target.insert_line(at, self.text.clone()) {
            return Err(CommandError::execution(
                NAME,
                format!(
                    "cannot insert before line {} (buffer has {} line(s))",
                    self.line,
                    target.len()
                ),
            ));
        }
        self.inserted_at = Some(at);
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let at = self
            .inserted_at
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        target
            .remove_line(at)
            .ok_or_else(|| CommandError::undo(NAME, format!("line {} is gone", at + 1)))?;
        Ok(())
    }
}

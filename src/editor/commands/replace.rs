// src/editor/commands/replace.rs

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

const NAME: &str = "replace";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Overwrites a line with new text.")]
struct ReplaceArgs {
    /// Line number to overwrite (1-based).
    line: usize,

    /// The new text.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[derive(Debug)]
pub struct ReplaceLine {
    line: usize,
    text: String,
    previous: Option<(usize, String)>,
}

impl ReplaceLine {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
            previous: None,
        }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: ReplaceArgs = registry::parse_args(NAME, &commons::verbatim(args))?;
        Ok(Box::new(Self::new(
            parsed.line,
            commons::join_words(&parsed.text),
        )))
    }
}

impl Command<Buffer> for ReplaceLine {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!("replace line {} with {}", self.line, commons::preview(&self.text))
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        let at = commons::existing_line(NAME, target, self.line)?;
        let old = target
            .replace_line(at, self.text.clone())
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

// src/editor/commands/delete.rs

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

const NAME: &str = "delete";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Deletes a line.")]
struct DeleteArgs {
    /// Line number to delete (1-based).
    line: usize,
}

/// Removes a line, keeping its text so `undo` can put it back.
#[derive(Debug)]
pub struct DeleteLine {
    line: usize,
    removed: Option<(usize, String)>,
}

impl DeleteLine {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            removed: None,
        }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: DeleteArgs = registry::parse_args(NAME, args)?;
        Ok(Box::new(Self::new(parsed.line)))
    }
}

impl Command<Buffer> for DeleteLine {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        match &self.removed {
            Some((_, text)) => format!("delete line {} ({})", self.line, commons::preview(text)),
            None => format!("delete line {}", self.line),
        }
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        let at = commons::existing_line(NAME, target, self.line)?;
        let text = target
            .remove_line(at)
            .ok_or_else(|| CommandError::execution(NAME, format!("line {} vanished", self.line)))?;
        self.removed = Some((at, text));
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let (at, text) = self
            .removed
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        if !target.insert_line(at, text) {
            return Err(CommandError::undo(
                NAME,
                format!("cannot reinsert at line {}", at + 1),
            ));
        }
        Ok(())
    }
}

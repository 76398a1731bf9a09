// src/editor/commands/append.rs

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

const NAME: &str = "append";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Appends a line at the end of the buffer.")]
struct AppendArgs {
    /// Text of the new line.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[derive(Debug)]
pub struct AppendLine {
    text: String,
    appended_at: Option<usize>,
}

impl AppendLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            appended_at: None,
        }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: AppendArgs = registry::parse_args(NAME, &commons::verbatim(args))?;
        Ok(Box::new(Self::new(commons::join_words(&parsed.text))))
    }
}

impl Command<Buffer> for AppendLine {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!("append {}", commons::preview(&self.text))
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        let at = target.len();
        if !target.insert_line(at, self.text.clone()) {
            return Err(CommandError::execution(NAME, "buffer rejected the line"));
        }
        self.appended_at = Some(at);
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let at = self
            .appended_at
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        target
            .remove_line(at)
            .ok_or_else(|| CommandError::undo(NAME, format!("line {} is gone", at + 1)))?;
        Ok(())
    }
}

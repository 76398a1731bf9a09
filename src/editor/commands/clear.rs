// src/editor/commands/clear.rs

use clap::Parser;

use crate::{
    core::{
        command::Command,
        error::Result,
        registry,
    },
    editor::commands::commons,
    models::{Buffer, BufferSnapshot},
};

const NAME: &str = "clear";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Removes every line from the buffer.")]
struct ClearArgs {}

/// Empties the buffer. Undo restores a full snapshot taken just before.
#[derive(Debug, Default)]
pub struct ClearBuffer {
    snapshot: Option<BufferSnapshot>,
}

impl ClearBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let _: ClearArgs = registry::parse_args(NAME, args)?;
        Ok(Box::new(Self::new()))
    }
}

impl Command<Buffer> for ClearBuffer {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        NAME.to_string()
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        self.snapshot = Some(target.snapshot());
        target.clear();
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        target.restore(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::CommandError, testing::args};

    #[test]
    fn test_clear_and_undo_restores_everything() {
        let original = Buffer::from_text("one\ntwo\nthree");
        let mut buffer = original.clone();
        let mut command = ClearBuffer::new();

        command.execute(&mut buffer).unwrap();
        assert!(buffer.is_empty());

        command.undo(&mut buffer).unwrap();
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_clear_takes_no_arguments() {
        assert!(matches!(
            ClearBuffer::create(&args(&["everything"])),
            Err(CommandError::InvalidArguments { .. })
        ));
    }
}

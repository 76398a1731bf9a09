// src/editor/commands/set.rs

use clap::{Parser, builder::RangedU64ValueParser};

use crate::{
    core::{command::Command, error::Result, registry},
    editor::commands::commons,
    models::Buffer,
};

const NAME: &str = "set";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "Sets the buffer's tab width.")]
struct SetArgs {
    /// The new tab width (1-16).
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..=16))]
    value: usize,
}

#[derive(Debug)]
pub struct SetTabWidth {
    value: usize,
    prior: Option<usize>,
}

impl SetTabWidth {
    pub fn new(value: usize) -> Self {
        Self { value, prior: None }
    }

    pub fn create(args: &[String]) -> Result<Box<dyn Command<Buffer>>> {
        let parsed: SetArgs = registry::parse_args(NAME, args)?;
        Ok(Box::new(Self::new(parsed.value)))
    }
}

impl Command<Buffer> for SetTabWidth {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!("set tab width {}", self.value)
    }

    fn execute(&mut self, target: &mut Buffer) -> Result<()> {
        self.prior = Some(target.set_tab_width(self.value));
        Ok(())
    }

    fn undo(&mut self, target: &mut Buffer) -> Result<()> {
        let prior = self
            .prior
            .take()
            .ok_or_else(|| commons::not_executed(NAME))?;
        target.set_tab_width(prior);
        Ok(())
    }
}

// src/core/testing.rs
//
// Minimal target and commands for exercising the engine without a text buffer.

use crate::core::{
    command::Command,
    error::{CommandError, Result},
    registry::{self, Registry},
};
use clap::Parser;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) value: i64,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct SetArgs {
    #[arg(allow_negative_numbers = true)]
    value: i64,
}

/// Sets the cell to a value, remembering the previous one.
#[derive(Debug)]
pub(crate) struct SetValue {
    value: i64,
    prior: Option<i64>,
}

impl SetValue {
    pub(crate) fn new(value: i64) -> Self {
        Self { value, prior: None }
    }

    pub(crate) fn create(args: &[String]) -> Result<Box<dyn Command<Cell>>> {
        let parsed: SetArgs = registry::parse_args("set", args)?;
        Ok(Box::new(Self::new(parsed.value)))
    }
}

impl Command<Cell> for SetValue {
    fn name(&self) -> &str {
        "set"
    }

    fn describe(&self) -> String {
        format!("set {}", self.value)
    }

    fn execute(&mut self, target: &mut Cell) -> Result<()> {
        self.prior = Some(target.value);
        target.value = self.value;
        Ok(())
    }

    fn undo(&mut self, target: &mut Cell) -> Result<()> {
        let prior = self
            .prior
            .take()
            .ok_or_else(|| CommandError::undo("set", "no prior value captured"))?;
        target.value = prior;
        Ok(())
    }
}

/// Reads the cell without changing it.
#[derive(Debug)]
pub(crate) struct Peek;

impl Command<Cell> for Peek {
    fn name(&self) -> &str {
        "peek"
    }

    fn describe(&self) -> String {
        "peek".to_string()
    }

    fn mutates(&self) -> bool {
        false
    }

    fn execute(&mut self, _target: &mut Cell) -> Result<()> {
        Ok(())
    }

    fn undo(&mut self, _target: &mut Cell) -> Result<()> {
        Ok(())
    }
}

/// Always fails to execute.
#[derive(Debug)]
pub(crate) struct Explode;

impl Command<Cell> for Explode {
    fn name(&self) -> &str {
        "explode"
    }

    fn describe(&self) -> String {
        "explode".to_string()
    }

    fn execute(&mut self, _target: &mut Cell) -> Result<()> {
        Err(CommandError::execution("explode", "boom"))
    }

    fn undo(&mut self, _target: &mut Cell) -> Result<()> {
        Err(CommandError::undo("explode", "never ran"))
    }
}

/// Registry with `set`, `peek` and `explode`.
pub(crate) fn cell_registry() -> Registry<Cell> {
    let mut registry = Registry::new();
    registry.register("set", SetValue::create).unwrap();
    registry
        .register("peek", |_: &[String]| -> Result<Box<dyn Command<Cell>>> {
            Ok(Box::new(Peek))
        })
        .unwrap();
    registry
        .register("explode", |_: &[String]| -> Result<Box<dyn Command<Cell>>> {
            Ok(Box::new(Explode))
        })
        .unwrap();
    registry
}

pub(crate) fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

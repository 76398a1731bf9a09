// src/bin/pynano.rs

use anyhow::Result;
use colored::*;
use pynano::{
    core::{config_loader, error::CommandError, guard::ReadOnly, observer::LogObserver},
    editor::{self, BUILTIN_COMMANDS, CommandDefinition},
    session::Session,
    t,
};
use std::io::{self, BufRead, Write};

/// What the loop does after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Sets up logging, loads the config and runs the session loop.
/// Failures before the loop starts are fatal; failures of individual
/// commands are printed and the loop continues.
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("\n{}: {:#}", t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = config_loader::load_session_config()?;
    let mut session = Session::from_config(&config)?;
    session.dispatcher_mut().subscribe(LogObserver);

    println!("{}", t!("repl.welcome").cyan());
    if session.buffer().is_read_only() {
        println!("{}", t!("repl.info.read_only").yellow());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", t!("repl.prompt").dimmed());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let Some(words) = shlex::split(line.trim()) else {
            eprintln!("{}", t!("repl.error.split").red());
            continue;
        };

        match handle_words(&mut session, &words) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("{}: {}", t!("common.error").red().bold(), e),
        }
    }

    println!("{}", t!("repl.bye"));
    Ok(())
}

/// Session built-ins first, then anything the registry knows.
fn handle_words(session: &mut Session, words: &[String]) -> Result<Flow, CommandError> {
    let Some((name, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    match name.as_str() {
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => match args.first() {
            Some(topic) => {
                let definition = editor::find_definition(topic)
                    .ok_or_else(|| CommandError::UnknownCommand(topic.clone()))?;
                print_definition(definition);
            }
            None => print_help(),
        },
        "show" => print_buffer(session),
        "history" => print_history(session),
        "undo" => {
            let entry = session.undo()?;
            println!(
                "{}",
                format!(t!("repl.info.undone"), description = entry.description).yellow()
            );
        }
        "redo" => {
            let entry = session.redo()?;
            println!(
                "{}",
                format!(t!("repl.info.redone"), description = entry.description).green()
            );
        }
        _ => {
            let entry = session.dispatch(name, args)?;
            println!(
                "{}",
                format!(t!("repl.info.executed"), description = entry.description).green()
            );
        }
    }
    Ok(Flow::Continue)
}

fn print_help() {
    println!("\n{}", t!("repl.help.builtins_header").yellow().bold());
    println!("  {}", t!("repl.help.builtins").cyan());
    println!("\n{}", t!("repl.help.registered_header").yellow().bold());
    for definition in BUILTIN_COMMANDS {
        print_definition(definition);
    }
    println!();
}

fn print_definition(definition: &CommandDefinition) {
    let aliases = if definition.aliases.is_empty() {
        String::new()
    } else {
        format!(" ({})", definition.aliases.join(", "))
    };
    println!("  {:<40}{}", definition.usage.cyan(), aliases.dimmed());
}

fn print_buffer(session: &Session) {
    let buffer = session.buffer();
    if buffer.is_empty() {
        println!("{}", t!("repl.info.buffer_empty").dimmed());
    } else {
        print!("{}", buffer);
    }
}

fn print_history(session: &Session) {
    let history = session.dispatcher().history();
    if history.is_empty() && !history.can_redo() {
        println!("{}", t!("repl.info.history_empty").dimmed());
        return;
    }
    for entry in history.redo_entries().iter().rev() {
        println!("  {} {}", "redo".dimmed(), entry.description.dimmed());
    }
    for (i, entry) in history.entries().iter().enumerate() {
        let marker = if i == 0 { "->" } else { "  " };
        println!("{} {} {}", marker.cyan(), "undo".blue(), entry.description);
    }
}

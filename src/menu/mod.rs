//! Interactive menu loop
//!
//! Presents the three-option main menu (execute a DOS command, view the
//! manual, exit) and owns all user-facing presentation: prompts, error
//! messages, the translation status line, and the framed command output.
//! Every outcome returns control to the menu; nothing here is fatal.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::executor::CommandExecutor;
use crate::manual;
use crate::mapping::{MappingTable, TableSource};
use crate::translator;

/// A parsed main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Execute,
    Manual,
    Exit,
}

impl MenuChoice {
    /// Parse user input into a menu choice
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Execute),
            "2" => Some(Self::Manual),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive menu shell
pub struct Menu {
    config: Config,
    executor: CommandExecutor,
}

impl Menu {
    pub fn new(config: Config) -> Self {
        info!("Using shell '{}' for command execution", config.shell.program);

        let executor = CommandExecutor::new(config.shell.program.clone());

        Self { config, executor }
    }

    /// Run the menu loop until the user chooses to exit
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        println!();
        println!("===== DOS Command Shell =====");
        println!();

        loop {
            print_menu();

            let choice = match prompt_line(&mut input, "\nEnter choice: ")? {
                Some(line) => line,
                None => {
                    debug!("stdin closed, leaving menu");
                    return Ok(());
                }
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Execute) => self.execute_round(&mut input)?,
                Some(MenuChoice::Manual) => {
                    println!("\n{}", manual::manual_text(&self.config.mapping.file));
                }
                Some(MenuChoice::Exit) => {
                    println!("\nExiting DOS command shell...");
                    return Ok(());
                }
                None => println!("\nInvalid choice. Please try again."),
            }

            if !pause(&mut input)? {
                return Ok(());
            }

            if self.config.ui.clear_screen {
                clear_screen()?;
            }
        }
    }

    /// Run a single DOS command line through the pipeline without the menu.
    ///
    /// Output goes to stdout unframed; notices and errors go to stderr so
    /// the output stays pipeable. Returns whether the command was translated
    /// and spawned successfully.
    pub fn run_once(&mut self, command: &str) -> Result<bool> {
        let (table, source) = MappingTable::load(&self.config.mapping.file);

        if source == TableSource::BuiltinDefaults {
            eprintln!(
                "Note: mapping file '{}' not found, using built-in defaults.",
                self.config.mapping.file.display()
            );
        }

        let native = match translator::translate(command, &table) {
            Ok(native) => native,
            Err(e) => {
                eprintln!("Error: {}.", e);
                return Ok(false);
            }
        };

        info!("Translated '{}' to '{}'", command, native);

        if self.config.ui.show_translations {
            eprintln!("Executing: {} (DOS) -> {} (native)", command, native);
        }

        let lines = match self.executor.execute(&native) {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error: {}.", e);
                return Ok(false);
            }
        };

        for line in lines {
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    warn!("Output stream ended early: {}", e);
                    break;
                }
            }
        }

        Ok(true)
    }

    // One round of the execute flow: prompt, translate, run, print framed
    // output. The mapping table is rebuilt on every round so live edits to
    // the mapping file are picked up immediately.
    fn execute_round(&mut self, input: &mut impl BufRead) -> Result<()> {
        let command = match prompt_line(input, "\nEnter DOS command: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let (table, source) = MappingTable::load(&self.config.mapping.file);

        if source == TableSource::BuiltinDefaults {
            println!(
                "Note: mapping file '{}' not found, using built-in defaults.",
                self.config.mapping.file.display()
            );
        }

        let native = match translator::translate(&command, &table) {
            Ok(native) => native,
            Err(e) => {
                println!("Error: {}.", e);
                return Ok(());
            }
        };

        info!("Translated '{}' to '{}'", command, native);

        if self.config.ui.show_translations {
            println!("Executing: {} (DOS) -> {} (native)", command, native);
        }

        let lines = match self.executor.execute(&native) {
            Ok(lines) => lines,
            Err(e) => {
                println!("Error: {}.", e);
                return Ok(());
            }
        };

        println!("\n----- Command Output -----");
        for line in lines {
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    warn!("Output stream ended early: {}", e);
                    break;
                }
            }
        }
        println!("-------------------------");

        Ok(())
    }
}

fn print_menu() {
    println!("===== DOS Command Shell =====");
    println!("1. Execute DOS command");
    println!("2. View manual");
    println!("3. Exit");
}

// Prompt on stdout, then read one line; None means stdin hit EOF
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

// "Press Enter to continue" gate between rounds; false means stdin hit EOF
fn pause(input: &mut impl BufRead) -> Result<bool> {
    print!("\nPress Enter to continue...");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(read != 0)
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("Failed to clear screen")?;

    Ok(())
}

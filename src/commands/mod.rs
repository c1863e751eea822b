//! Command handlers
//!
//! `dispatch` runs one parsed command and returns the process exit code.
//! I/O failures while scaffolding come back as `Err` instead.

pub mod addclass;
pub mod help;

use anyhow::Result;

use crate::cli::Command;
use crate::config::Config;

/// Exit code for usage errors and unknown commands
pub const EXIT_USAGE: i32 = 2;

pub fn dispatch(command: Command, config: Config) -> Result<i32> {
    match command {
        Command::Empty => {
            help::hint()?;
            Ok(0)
        }
        Command::Help => {
            help::execute()?;
            Ok(0)
        }
        Command::AddClass { class_name, path } => {
            addclass::execute(&class_name, &path, config)?;
            Ok(0)
        }
        Command::AddClassUsage => {
            addclass::usage()?;
            Ok(EXIT_USAGE)
        }
        Command::Unknown { name } => {
            help::unknown(&name)?;
            Ok(EXIT_USAGE)
        }
    }
}

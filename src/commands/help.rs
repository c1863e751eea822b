use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

pub const HINT: &str = "Type --help for help";

/// Usage line for `addclass`, shared by the command list and usage errors
pub const ADDCLASS_USAGE: &str = " => addclass <class_name> <path>";

/// `euler` with no arguments
pub fn hint() -> Result<()> {
    write_hint(&mut io::stdout().lock())?;
    Ok(())
}

/// `euler -h` / `euler --help`
pub fn execute() -> Result<()> {
    write_commands(&mut io::stdout().lock())?;
    Ok(())
}

/// Unrecognised first argument, reported on stderr
pub fn unknown(name: &str) -> Result<()> {
    write_unknown(&mut io::stderr().lock(), name)?;
    Ok(())
}

pub fn write_hint(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HINT}")
}

pub fn write_commands(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out, "{ADDCLASS_USAGE}")
}

pub fn write_unknown(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{} unknown command '{name}'", "error:".red().bold())?;
    writeln!(out, "{HINT}")
}

//! Command-line grammar
//!
//! clap's built-in help, help subcommand and version flag are turned off:
//! `-h`/`--help` prints the fixed command list, and arguments clap rejects
//! are classified by their first argument instead of ending in a clap error.

use clap::{Parser, Subcommand};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const BIN_NAME: &str = "euler";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print the list of available commands
    #[arg(short = 'h', long = "help")]
    help: bool,

    #[command(subcommand)]
    command: Option<Subcommands>,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// Generate <class_name>.h and <class_name>.cpp in <path>
    #[command(name = "addclass", disable_help_flag = true)]
    AddClass {
        /// Expected: <class_name> <path>
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments at all
    Empty,
    /// `-h` / `--help`
    Help,
    /// `addclass <class_name> <path>`
    AddClass { class_name: String, path: PathBuf },
    /// `addclass` with the wrong argument count or an empty class name
    AddClassUsage,
    /// Anything else; `name` is the first argument as given
    Unknown { name: String },
}

impl Command {
    /// Parse process arguments, program name excluded
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.iter().cloned());

        let command = match Cli::try_parse_from(argv) {
            Ok(cli) => Self::from_cli(cli, &args),
            Err(err) => {
                debug!("clap rejected arguments: {:?}", err.kind());
                Self::from_rejected(&args)
            }
        };

        debug!("parsed command: {:?}", command);
        command
    }

    fn from_cli(cli: Cli, args: &[OsString]) -> Self {
        if cli.help {
            return Command::Help;
        }

        match cli.command {
            None if args.is_empty() => Command::Empty,
            // Only `--` and the like: something was given, just nothing clap keeps
            None => Self::unknown(&args[0]),
            // clap swallows `--`, so the count comes from the raw arguments
            Some(Subcommands::AddClass { args: kept }) => {
                debug!("clap kept {} of {} addclass arguments", kept.len(), args.len() - 1);
                Self::add_class(&args[1..])
            }
            Some(Subcommands::External(external)) => {
                debug!("external subcommand: {:?}", external);
                Self::unknown(&args[0])
            }
        }
    }

    fn add_class(args: &[OsString]) -> Self {
        match args {
            [class_name, path] if !class_name.is_empty() => match class_name.to_str() {
                Some(class_name) => Command::AddClass {
                    class_name: class_name.to_string(),
                    path: PathBuf::from(path),
                },
                None => Command::AddClassUsage,
            },
            _ => Command::AddClassUsage,
        }
    }

    /// Classify arguments clap refused (unknown flags, non UTF-8 values)
    fn from_rejected(args: &[OsString]) -> Self {
        match args.first() {
            None => Command::Empty,
            Some(first) if first == "-h" || first == "--help" => Command::Help,
            Some(first) if first == "addclass" => Self::add_class(&args[1..]),
            Some(first) => Self::unknown(first),
        }
    }

    fn unknown(name: &OsStr) -> Self {
        Command::Unknown {
            name: name.to_string_lossy().into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Command::from_args(args.iter().copied())
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(&[]), Command::Empty);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["-h"]), Command::Help);
        assert_eq!(parse(&["--help"]), Command::Help);
        assert_eq!(parse(&["--help", "addclass", "Foo"]), Command::Help);
        assert_eq!(parse(&["-h", "--help"]), Command::Help);
    }

    #[test]
    fn test_addclass() {
        assert_eq!(
            parse(&["addclass", "Renderer", "./src"]),
            Command::AddClass {
                class_name: "Renderer".to_string(),
                path: PathBuf::from("./src"),
            }
        );
    }

    #[test]
    fn test_addclass_wrong_count() {
        assert_eq!(parse(&["addclass"]), Command::AddClassUsage);
        assert_eq!(parse(&["addclass", "OnlyOneArg"]), Command::AddClassUsage);
        assert_eq!(parse(&["addclass", "A", "b", "c"]), Command::AddClassUsage);
    }

    #[test]
    fn test_addclass_empty_name() {
        assert_eq!(parse(&["addclass", "", "./src"]), Command::AddClassUsage);
    }

    #[test]
    fn test_addclass_help_is_not_help() {
        // Only a leading -h/--help means help; after addclass it is an argument
        assert_eq!(parse(&["addclass", "--help"]), Command::AddClassUsage);
    }

    #[test]
    fn test_addclass_hyphenated_values() {
        assert_eq!(
            parse(&["addclass", "Foo", "-out"]),
            Command::AddClass {
                class_name: "Foo".to_string(),
                path: PathBuf::from("-out"),
            }
        );
    }

    #[test]
    fn test_addclass_double_dash() {
        // `--` counts as an argument like any other
        assert_eq!(parse(&["addclass", "--", "Foo", "bar"]), Command::AddClassUsage);
        assert_eq!(
            parse(&["addclass", "--", "Foo"]),
            Command::AddClass {
                class_name: "--".to_string(),
                path: PathBuf::from("Foo"),
            }
        );
    }

    #[test]
    fn test_lone_double_dash_is_unknown() {
        assert_eq!(
            parse(&["--"]),
            Command::Unknown {
                name: "--".to_string()
            }
        );
        assert_eq!(
            parse(&["--", "addclass", "Foo", "bar"]),
            Command::Unknown {
                name: "--".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_subcommand() {
        assert_eq!(
            parse(&["addfile", "x"]),
            Command::Unknown {
                name: "addfile".to_string()
            }
        );
        assert_eq!(
            parse(&["help"]),
            Command::Unknown {
                name: "help".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["--version"]),
            Command::Unknown {
                name: "--version".to_string()
            }
        );
    }
}

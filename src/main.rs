use anyhow::Result;

use euler_scaffold::{commands, logging, Command, Config};

fn main() -> Result<()> {
    logging::init();

    let command = Command::from_args(std::env::args_os().skip(1));
    let exit_code = commands::dispatch(command, Config::default())?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

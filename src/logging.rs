//! Diagnostic logging
//!
//! Logs go to stderr so stdout carries only the command output.
//! Filter is read from `EULER_LOG` (e.g. `EULER_LOG=debug`), default `warn`.

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "EULER_LOG";

pub fn init() {
    let env = Env::default().filter_or(LOG_ENV, "warn");

    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

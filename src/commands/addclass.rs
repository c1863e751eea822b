use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::scaffold::Scaffold;

use super::help::ADDCLASS_USAGE;

/// `euler addclass <class_name> <path>`
///
/// Writes `<path>/<class_name>.h` and `<path>/<class_name>.cpp`. Prints
/// nothing on success.
pub fn execute(class_name: &str, path: &Path, config: Config) -> Result<()> {
    let scaffold = Scaffold::new(config);
    scaffold.create_class(class_name, path)?;
    Ok(())
}

/// `addclass` called with the wrong arguments
pub fn usage() -> Result<()> {
    writeln!(io::stdout().lock(), "{ADDCLASS_USAGE}")?;
    Ok(())
}

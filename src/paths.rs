//! Where generated class files land.
//!
//! No I/O here. The target directory is used verbatim, no existence check.
//! Paths are plain concatenation `<dir>/<ClassName>.<ext>`: an absolute class
//! name still lands under `<dir>`, and an empty `<dir>` means the root.
//!
//! ```text
//! <dir>/
//! ├── <ClassName>.h     # declaration
//! └── <ClassName>.cpp   # definition
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Declaration file: `<dir>/<class_name>.h`
pub fn declaration_path(dir: &Path, class_name: &str, config: &Config) -> PathBuf {
    class_file(dir, class_name, &config.declaration_ext)
}

/// Definition file: `<dir>/<class_name>.cpp`
pub fn definition_path(dir: &Path, class_name: &str, config: &Config) -> PathBuf {
    class_file(dir, class_name, &config.definition_ext)
}

fn class_file(dir: &Path, class_name: &str, ext: &str) -> PathBuf {
    let mut file = OsString::from(dir.as_os_str());
    file.push("/");
    file.push(class_name);
    file.push(".");
    file.push(ext);
    PathBuf::from(file)
}

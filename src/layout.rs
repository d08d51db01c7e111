//! Fixed on-disk layout of a `ccc` project.
//!
//! ```text
//! <root>/
//!   .ccc_config              project_type=c|cpp
//!   compile_commands.json    regenerated on every build
//!   src/                     sources (not recursed)
//!   include/                 headers, passed as -Iinclude
//!   bin/main                 linked executable
//!   bin/obj/<name>.o         one object per source
//! ```
//!
//! All paths here are relative to the project root. The toolchain runs with
//! the root as its working directory, so they go into command lines as-is.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".ccc_config";
pub const COMPILE_COMMANDS: &str = "compile_commands.json";
pub const SRC_DIR: &str = "src";
pub const INCLUDE_DIR: &str = "include";
pub const BIN_DIR: &str = "bin";
pub const EXECUTABLE_NAME: &str = "main";

pub fn obj_dir() -> PathBuf {
    Path::new(BIN_DIR).join("obj")
}

pub fn executable() -> PathBuf {
    Path::new(BIN_DIR).join(EXECUTABLE_NAME)
}

/// Object artifact for a source: `bin/obj/<file name>.o`.
///
/// Only the file name is used, extension included (`src/util.c` ->
/// `bin/obj/util.c.o`). Two sources with the same file name in different
/// directories map to the same object; the last one compiled wins.
pub fn object_path(source: &Path) -> PathBuf {
    let mut name: OsString = source
        .file_name()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(".o");
    obj_dir().join(name)
}

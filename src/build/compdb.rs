//! `compile_commands.json` generation.
//!
//! The database describes how each source *would* be compiled right now,
//! so it is rewritten in full on every build, whether or not anything is
//! stale.

use super::toolchain::{self, Invocation};
use crate::config::ProjectConfig;
use crate::error::BuildError;
use crate::layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    pub directory: String,
    pub command: String,
    pub file: String,
}

/// `<cc> -c <src> -o bin/obj/<name>.o -Iinclude -std=<std> -Wall -Wextra -O2 -l<lib>...`
pub fn database_invocation(source: &Path, config: &ProjectConfig) -> Invocation {
    Invocation::new(toolchain::compiler(config.language))
        .arg("-c")
        .arg(source)
        .arg("-o")
        .arg(layout::object_path(source))
        .arg(format!("-I{}", layout::INCLUDE_DIR))
        .arg(format!("-std={}", toolchain::standard(config.language)))
        .args(toolchain::BASE_FLAGS)
        .args(config.library_flags())
}

/// One entry per source, in `config.sources` order.
pub fn entries(directory: &Path, config: &ProjectConfig) -> Vec<CompileCommand> {
    let directory = directory.to_string_lossy().into_owned();
    config
        .sources
        .iter()
        .map(|src| CompileCommand {
            directory: directory.clone(),
            command: database_invocation(&src.path, config).to_string(),
            file: src.path.to_string_lossy().into_owned(),
        })
        .collect()
}

/// Truncates and rewrites `<root>/compile_commands.json`.
pub fn write(root: &Path, config: &ProjectConfig) -> Result<(), BuildError> {
    let path = root.join(layout::COMPILE_COMMANDS);
    let write_err = |e| BuildError::WriteDatabase {
        path: path.clone(),
        source: e,
    };
    let directory = std::path::absolute(root).map_err(write_err)?;
    let json_str = serde_json::to_string_pretty(&entries(&directory, config))?;
    fs::write(&path, json_str + "\n").map_err(write_err)?;
    Ok(())
}

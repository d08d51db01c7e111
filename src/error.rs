//! Failure taxonomy for the build pipeline.
//!
//! Every variant is fatal: the pipeline stops at the first error and the
//! CLI turns it into exit status 1.

use crate::build::Stage;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// `.ccc_config` does not exist in the project root.
    #[error("No project found. Run 'ccc init' first.")]
    ConfigMissing,

    /// `.ccc_config` exists but could not be read.
    #[error("Failed to read {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scanner returned nothing for the configured language.
    #[error("No source files found in {}/", .dir.display())]
    NoSourceFiles { dir: PathBuf },

    #[error("Failed to write {}", .path.display())]
    WriteDatabase {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize compile_commands.json")]
    Database(#[from] serde_json::Error),

    #[error("Failed to create object directory {}/", .path.display())]
    CreateObjDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler exited with a nonzero status.
    #[error("Compilation failed for {}", .file.display())]
    CompileFailure { file: PathBuf, stderr: String },

    /// The linker exited with a nonzero status.
    #[error("Linking failed")]
    LinkFailure { stderr: String },

    /// The toolchain binary could not be started at all.
    #[error("Failed to execute '{program}'")]
    Spawn {
        program: String,
        stage: Stage,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// The pipeline stage the build failed in.
    pub fn stage(&self) -> Stage {
        match self {
            BuildError::ConfigMissing | BuildError::ReadConfig { .. } => Stage::LoadConfig,
            BuildError::NoSourceFiles { .. } => Stage::Scan,
            BuildError::WriteDatabase { .. } | BuildError::Database(_) => Stage::WriteDb,
            BuildError::CreateObjDir { .. } | BuildError::CompileFailure { .. } => {
                Stage::CompileLoop
            }
            BuildError::LinkFailure { .. } => Stage::Link,
            BuildError::Spawn { stage, .. } => *stage,
        }
    }

    /// Toolchain diagnostics captured with the failure, if any.
    pub fn toolchain_output(&self) -> Option<&str> {
        match self {
            BuildError::CompileFailure { stderr, .. } | BuildError::LinkFailure { stderr } => {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }
}

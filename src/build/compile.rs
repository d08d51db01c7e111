use super::Stage;
use super::toolchain::{self, Invocation, Runner};
use crate::config::ProjectConfig;
use crate::error::BuildError;
use crate::layout;
use std::path::Path;

/// Like the database command, plus `-Wpedantic` and without libraries.
pub fn compile_invocation(source: &Path, object: &Path, config: &ProjectConfig) -> Invocation {
    Invocation::new(toolchain::compiler(config.language))
        .arg("-c")
        .arg(source)
        .arg("-o")
        .arg(object)
        .arg(format!("-I{}", layout::INCLUDE_DIR))
        .arg(format!("-std={}", toolchain::standard(config.language)))
        .args(["-Wall", "-Wextra", "-Wpedantic", "-O2"])
}

/// Compiles one source into `object`, blocking until the compiler exits.
///
/// Returns whatever the compiler wrote to stderr on success (warnings).
pub fn compile<R: Runner + ?Sized>(
    root: &Path,
    source: &Path,
    object: &Path,
    config: &ProjectConfig,
    runner: &R,
) -> Result<String, BuildError> {
    let invocation = compile_invocation(source, object, config);
    let output = runner
        .run(&invocation, root)
        .map_err(|e| BuildError::Spawn {
            program: invocation.program.clone(),
            stage: Stage::CompileLoop,
            source: e,
        })?;

    if !output.success {
        return Err(BuildError::CompileFailure {
            file: source.to_path_buf(),
            stderr: output.stderr,
        });
    }
    Ok(output.stderr)
}

use super::{SourceRecord, Stage};
use super::toolchain::{self, Invocation, Runner};
use crate::config::ProjectConfig;
use crate::error::BuildError;
use crate::layout;
use std::path::Path;

/// `<cc> <every object> -o bin/main -l<lib>...`
///
/// Objects come from every current source, not only the ones recompiled
/// in this run.
pub fn link_invocation(config: &ProjectConfig) -> Invocation {
    Invocation::new(toolchain::compiler(config.language))
        .args(config.sources.iter().map(SourceRecord::object_path))
        .arg("-o")
        .arg(layout::executable())
        .args(config.library_flags())
}

/// Links `bin/main`, blocking until the linker exits.
pub fn link<R: Runner + ?Sized>(
    root: &Path,
    config: &ProjectConfig,
    runner: &R,
) -> Result<String, BuildError> {
    let invocation = link_invocation(config);
    let output = runner
        .run(&invocation, root)
        .map_err(|source| BuildError::Spawn {
            program: invocation.program.clone(),
            stage: Stage::Link,
            source,
        })?;

    if !output.success {
        return Err(BuildError::LinkFailure {
            stderr: output.stderr,
        });
    }
    Ok(output.stderr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{SourceRecord, ToolOutput};
    use crate::config::Language;
    use std::io;
    use std::path::PathBuf;
    use std::time::SystemTime;

    struct Failing;

    impl Runner for Failing {
        fn run(&self, _invocation: &Invocation, _cwd: &Path) -> io::Result<ToolOutput> {
            Ok(ToolOutput {
                success: false,
                stderr: "undefined reference to `foo'".into(),
            })
        }
    }

    struct Missing;

    impl Runner for Missing {
        fn run(&self, _invocation: &Invocation, _cwd: &Path) -> io::Result<ToolOutput> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn config(libs: &[&str]) -> ProjectConfig {
        let mut config =
            ProjectConfig::new(Language::C, libs.iter().map(|l| l.to_string()).collect());
        config.sources = ["src/a.c", "src/b.c"]
            .iter()
            .map(|f| SourceRecord {
                path: PathBuf::from(f),
                modified: SystemTime::UNIX_EPOCH,
            })
            .collect();
        config
    }

    #[test]
    fn test_link_command_lists_all_objects_then_libs() {
        let inv = link_invocation(&config(&["m", "pthread"]));
        assert_eq!(
            inv.to_string(),
            "gcc bin/obj/a.c.o bin/obj/b.c.o -o bin/main -lm -lpthread"
        );
    }

    #[test]
    fn test_nonzero_exit_is_link_failure() {
        let err = link(Path::new("."), &config(&[]), &Failing).unwrap_err();
        assert!(matches!(err, BuildError::LinkFailure { .. }));
        assert!(err.toolchain_output().unwrap().contains("foo"));
    }

    #[test]
    fn test_unstartable_linker_is_spawn_error() {
        let err = link(Path::new("."), &config(&[]), &Missing).unwrap_err();
        match err {
            BuildError::Spawn { program, stage, .. } => {
                assert_eq!(program, "gcc");
                assert_eq!(stage, Stage::Link);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

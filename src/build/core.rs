use super::compile::{compile, compile_invocation};
use super::link::{link, link_invocation};
use super::toolchain::{Runner, SystemRunner};
use super::{compdb, scan, stale};
use crate::config::{self, ProjectConfig};
use crate::error::BuildError;
use crate::layout;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// States of a single build. A failure in any state before `Done` ends the
/// run; `BuildError::stage` reports which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadConfig,
    Scan,
    WriteDb,
    CompileLoop,
    Link,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadConfig => "load-config",
            Stage::Scan => "scan",
            Stage::WriteDb => "write-db",
            Stage::CompileLoop => "compile",
            Stage::Link => "link",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Libraries for this invocation only, in link order.
    pub libraries: Vec<String>,
    /// Print stage transitions and every command before it runs.
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Sources recompiled in this run, in compile order.
    pub compiled: Vec<PathBuf>,
    /// Relative to the project root.
    pub executable: PathBuf,
}

impl BuildReport {
    pub fn up_to_date(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// Builds the project at `root` with the real toolchain.
pub fn build_project(root: &Path, options: &BuildOptions) -> Result<BuildReport, BuildError> {
    run_pipeline(root, options, &SystemRunner)
}

/// Runs the whole pipeline once. The first error ends the run: a failed
/// compile skips both the remaining sources and the link.
pub fn run_pipeline<R: Runner + ?Sized>(
    root: &Path,
    options: &BuildOptions,
    runner: &R,
) -> Result<BuildReport, BuildError> {
    let start_time = Instant::now();

    enter(Stage::LoadConfig, options);
    let language = config::load(root)?;
    let mut config = ProjectConfig::new(language, options.libraries.clone());

    enter(Stage::Scan, options);
    config.sources = scan::scan(root, language);
    if config.sources.is_empty() {
        return Err(BuildError::NoSourceFiles {
            dir: PathBuf::from(layout::SRC_DIR),
        });
    }
    if options.verbose {
        println!(
            "   {} {} {} source(s)",
            "·".dimmed(),
            language,
            config.sources.len()
        );
    }

    // Written before staleness is known: it records how each source would
    // be compiled, not what this run compiles.
    enter(Stage::WriteDb, options);
    compdb::write(root, &config)?;

    enter(Stage::CompileLoop, options);
    let obj_dir = root.join(layout::obj_dir());
    fs::create_dir_all(&obj_dir).map_err(|e| BuildError::CreateObjDir {
        path: obj_dir,
        source: e,
    })?;
    let compiled = compile_stale(root, &config, options, runner)?;
    if compiled.is_empty() {
        println!("{} All files up to date.", "⚡".green());
    }

    // Always relink: the library list may differ from the previous run.
    enter(Stage::Link, options);
    println!("   {} Linking executable...", "🔗".cyan());
    if options.verbose {
        println!("   {} {}", "$".dimmed(), link_invocation(&config));
    }
    let warnings = link(root, &config, runner)?;
    print_warnings("linking", &warnings);

    let executable = layout::executable();
    println!(
        "{} Build successful! Executable: {} ({:.2?})",
        "✓".green(),
        executable.display().to_string().bold(),
        start_time.elapsed()
    );
    enter(Stage::Done, options);

    Ok(BuildReport {
        compiled,
        executable,
    })
}

/// Compiles stale sources one at a time in scan order. Staleness of each
/// source is checked only after the previous one has been compiled.
fn compile_stale<R: Runner + ?Sized>(
    root: &Path,
    config: &ProjectConfig,
    options: &BuildOptions,
    runner: &R,
) -> Result<Vec<PathBuf>, BuildError> {
    let style =
        ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
    let pb = ProgressBar::new(config.sources.len() as u64);
    pb.set_style(style);

    let mut compiled = Vec::new();
    for src in &config.sources {
        let object = src.object_path();
        if stale::is_stale(&root.join(&src.path), &root.join(&object)) {
            pb.set_message(format!("Compiling {}", src.path.display()));
            pb.suspend(|| {
                println!("   {} Compiling: {}", "⚙".blue(), src.path.display());
                if options.verbose {
                    println!(
                        "   {} {}",
                        "$".dimmed(),
                        compile_invocation(&src.path, &object, config)
                    );
                }
            });

            match compile(root, &src.path, &object, config, runner) {
                Ok(warnings) => {
                    pb.suspend(|| print_warnings(&src.path.display().to_string(), &warnings))
                }
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }
            compiled.push(src.path.clone());
        } else if options.verbose {
            pb.suspend(|| println!("   {} Fresh: {}", "·".dimmed(), src.path.display()));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(compiled)
}

fn print_warnings(what: &str, stderr: &str) {
    if !stderr.trim().is_empty() {
        eprintln!("{} Warning in {}:\n{}", "!".yellow(), what, stderr.trim_end());
    }
}

fn enter(stage: Stage, options: &BuildOptions) {
    if options.verbose {
        println!("{} {}", "→".dimmed(), stage.to_string().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Invocation, ToolOutput};
    use std::cell::RefCell;
    use std::io;

    /// Pretends to be gcc: writes the `-o` target and records every call.
    #[derive(Default)]
    struct FakeToolchain {
        calls: RefCell<Vec<Invocation>>,
    }

    impl Runner for FakeToolchain {
        fn run(&self, invocation: &Invocation, cwd: &Path) -> io::Result<ToolOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            if let Some(pos) = invocation.args.iter().position(|a| a == "-o") {
                fs::write(cwd.join(&invocation.args[pos + 1]), b"")?;
            }
            Ok(ToolOutput {
                success: true,
                stderr: String::new(),
            })
        }
    }

    fn project(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        config::save(dir.path(), config::Language::C).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        for f in files {
            fs::write(dir.path().join("src").join(f), "int main(void) { return 0; }\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_first_build_compiles_everything_then_links() {
        let dir = project(&["b.c", "a.c"]);
        let tc = FakeToolchain::default();
        let report = run_pipeline(dir.path(), &BuildOptions::default(), &tc).unwrap();

        assert_eq!(
            report.compiled,
            vec![PathBuf::from("src/a.c"), PathBuf::from("src/b.c")]
        );
        let calls = tc.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].to_string(), "gcc bin/obj/a.c.o bin/obj/b.c.o -o bin/main");
        assert!(dir.path().join("bin").join("obj").is_dir());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::CompileLoop.to_string(), "compile");
        assert_eq!(Stage::WriteDb.to_string(), "write-db");
    }

    #[test]
    fn test_report_up_to_date() {
        let report = BuildReport {
            compiled: Vec::new(),
            executable: layout::executable(),
        };
        assert!(report.up_to_date());
    }
}

//! CLI behaviour of the `ccc` binary: exit codes, diagnostics and a real
//! gcc build when one is available.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn ccc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ccc"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute ccc")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// gcc with C23 support, or None when the test should be skipped.
fn usable_gcc(scratch: &Path) -> Option<()> {
    let check = scratch.join("check.c");
    fs::write(&check, "int main(void) { return 0; }\n").ok()?;
    let status = Command::new("gcc")
        .args(["-std=c23", "-c"])
        .arg(&check)
        .arg("-o")
        .arg(scratch.join("check.o"))
        .status()
        .ok()?;
    status.success().then_some(())
}

#[test]
fn test_build_without_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = ccc(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ccc init"));
    assert!(!dir.path().join("compile_commands.json").exists());
}

#[test]
fn test_build_with_no_sources_fails() {
    let dir = tempfile::tempdir().unwrap();
    let init = ccc(dir.path(), &["init", "--lang", "c"]);
    assert!(init.status.success(), "init failed: {}", stderr(&init));
    fs::remove_file(dir.path().join("src").join("main.c")).unwrap();

    let output = ccc(dir.path(), &["build"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No source files found"));
    assert_eq!(
        fs::read_to_string(dir.path().join("compile_commands.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_init_writes_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let output = ccc(dir.path(), &["init", "--lang", "cpp"]);
    assert!(output.status.success());

    for path in [
        PathBuf::from("src/main.cpp"),
        PathBuf::from(".clangd"),
        PathBuf::from(".clang-format"),
        PathBuf::from("compile_commands.json"),
    ] {
        assert!(dir.path().join(&path).is_file(), "{} missing", path.display());
    }
    assert!(dir.path().join("include").is_dir());
    assert!(dir.path().join("bin").join("obj").is_dir());
    assert_eq!(
        fs::read_to_string(dir.path().join(".ccc_config")).unwrap(),
        "project_type=cpp\n"
    );
}

#[test]
fn test_init_without_lang_defaults_to_c_when_not_interactive() {
    let dir = tempfile::tempdir().unwrap();
    let output = ccc(dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(dir.path().join("src").join("main.c").is_file());
}

#[test]
fn test_real_gcc_build_and_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    if usable_gcc(dir.path()).is_none() {
        eprintln!("Skipping test: gcc with -std=c23 not available");
        return;
    }

    assert!(ccc(dir.path(), &["init", "--lang", "c"]).status.success());
    fs::write(
        dir.path().join("src").join("util.c"),
        "#include <math.h>\ndouble root(double x) { return sqrt(x); }\n",
    )
    .unwrap();

    let output = ccc(dir.path(), &["-l", "m"]);
    assert!(output.status.success(), "Build failed: {}", stderr(&output));
    assert!(dir.path().join("bin").join("main").is_file());
    assert!(dir.path().join("bin").join("obj").join("main.c.o").is_file());
    assert!(dir.path().join("bin").join("obj").join("util.c.o").is_file());

    let output = ccc(dir.path(), &["build", "-l", "m"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All files up to date."));

    let db: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("compile_commands.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(db.as_array().unwrap().len(), 2);
}

#[test]
fn test_real_gcc_compile_error_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    if usable_gcc(dir.path()).is_none() {
        eprintln!("Skipping test: gcc with -std=c23 not available");
        return;
    }

    assert!(ccc(dir.path(), &["init", "--lang", "c"]).status.success());
    fs::write(dir.path().join("src").join("broken.c"), "int broken( {\n").unwrap();

    let output = ccc(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Compilation failed for src/broken.c"));
    assert!(!dir.path().join("bin").join("main").exists());
}

#[test]
fn test_unwritable_database_names_the_stage_and_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ccc(dir.path(), &["init", "--lang", "c"]).status.success());
    fs::remove_file(dir.path().join("compile_commands.json")).unwrap();
    fs::create_dir_all(dir.path().join("compile_commands.json")).unwrap();

    let output = ccc(dir.path(), &["build"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("write-db stage"), "stderr: {err}");
    assert!(err.contains("compile_commands.json"), "stderr: {err}");
    assert!(!dir.path().join("bin").join("obj").join("main.c.o").exists());
}

//! Fixed toolchain selection and subprocess execution.
//!
//! There is no detection: the language variant alone picks the compiler
//! and the `-std=` value. Commands are kept as a program plus an argument
//! list and never go through a shell.

use crate::config::Language;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

/// Compiler driver used for both compiling and linking.
pub fn compiler(language: Language) -> &'static str {
    match language {
        Language::C => "gcc",
        Language::Cpp => "g++",
    }
}

/// Value passed as `-std=<standard>`.
pub fn standard(language: Language) -> &'static str {
    match language {
        Language::C => "c23",
        Language::Cpp => "c++23",
    }
}

/// Warning and optimisation flags shared by every compile command.
pub const BASE_FLAGS: [&str; 3] = ["-Wall", "-Wextra", "-O2"];

/// One external tool call. Arguments stay `OsString` so file names that are
/// not valid UTF-8 reach the tool unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }
}

/// Space-joined command line, the form stored in `compile_commands.json`.
/// Non-UTF-8 arguments are shown lossily here only.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What the pipeline needs back from a finished tool.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub success: bool,
    pub stderr: String,
}

/// Runs toolchain commands. Calls block until the tool exits.
pub trait Runner {
    /// `Err` only when the program could not be started.
    fn run(&self, invocation: &Invocation, cwd: &Path) -> io::Result<ToolOutput>;
}

/// Spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> io::Result<ToolOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .output()?;
        Ok(ToolOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

use crate::build::SourceRecord;
use crate::error::BuildError;
use crate::layout;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Key in `.ccc_config` holding the language variant.
pub const PROJECT_TYPE_KEY: &str = "project_type";

/// Project-wide language choice, fixed at `ccc init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    C,
    Cpp,
}

impl Language {
    /// Value written after `project_type=`.
    pub fn as_config_value(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// Anything that is not `cpp`/`c++` is a C project.
    pub fn from_config_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cpp" | "c++" => Language::Cpp,
            _ => Language::C,
        }
    }

    /// Source extensions picked up by the scanner. C++ projects may mix in C.
    pub fn source_extensions(self) -> &'static [&'static str] {
        match self {
            Language::C => &["c"],
            Language::Cpp => &["cpp", "cc", "cxx", "c"],
        }
    }

    pub fn main_file(self) -> &'static str {
        match self {
            Language::C => "main.c",
            Language::Cpp => "main.cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::Cpp => write!(f, "C++"),
        }
    }
}

/// Everything a single build invocation knows about the project.
///
/// Rebuilt on every run: the language comes from `.ccc_config`, libraries
/// from the command line and sources from the scanner.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    pub language: Language,
    /// Link order is the order given on the command line.
    pub libraries: Vec<String>,
    pub sources: Vec<SourceRecord>,
}

impl ProjectConfig {
    pub fn new(language: Language, libraries: Vec<String>) -> Self {
        Self {
            language,
            libraries,
            sources: Vec::new(),
        }
    }

    /// `-l<lib>` flags in library order.
    pub fn library_flags(&self) -> impl Iterator<Item = String> + '_ {
        self.libraries.iter().map(|lib| format!("-l{}", lib))
    }
}

/// Reads the language variant persisted in `<root>/.ccc_config`.
pub fn load(root: &Path) -> Result<Language, BuildError> {
    let path = root.join(layout::CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(BuildError::ConfigMissing),
        Err(e) => return Err(BuildError::ReadConfig { path, source: e }),
    };
    Ok(parse(&content))
}

fn parse(content: &str) -> Language {
    let mut language = Language::C;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=')
            && key.trim() == PROJECT_TYPE_KEY
        {
            language = Language::from_config_value(value);
        }
    }
    language
}

/// Writes `.ccc_config`. Only `ccc init` calls this.
pub fn save(root: &Path, language: Language) -> std::io::Result<()> {
    fs::write(
        root.join(layout::CONFIG_FILE),
        format!("{}={}\n", PROJECT_TYPE_KEY, language.as_config_value()),
    )
}

/// Splits one `-l` argument on commas and whitespace, e.g. `"m,pthread"` or
/// `"m pthread"`. Empty pieces are dropped, duplicates kept.
pub fn parse_library_list(arg: &str) -> Vec<String> {
    arg.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Hints appended to compiler and linker failures.

use colored::*;

pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    pub fn analyze(output: &str) -> Option<String> {
        if output.contains("undefined reference to `main'")
            || output.contains("undefined reference to `WinMain")
        {
            return Some(format!(
                "Your project is missing a {} function.\nEvery build links {} from all sources in {}.",
                "main()".bold().yellow(),
                "bin/main".bold(),
                "src/".bold()
            ));
        }

        if output.contains("undefined reference to") || output.contains("cannot find -l") {
            return Some(format!(
                "It looks like a {} error.\nPass the libraries you need with {}, e.g. {}.",
                "Linker".bold().red(),
                "-l".bold().yellow(),
                "ccc -l \"m,pthread\"".bold().green()
            ));
        }

        if output.contains("fatal error: ") && output.contains("No such file or directory") {
            return Some(format!(
                "It looks like a {} error.\nProject headers belong in {}, which is always on the include path.",
                "Missing Header".bold().red(),
                "include/".bold().yellow()
            ));
        }

        if output.contains("unrecognized command-line option '-std=c23'")
            || output.contains("unrecognized command-line option '-std=c++23'")
            || output.contains("invalid value 'c23'")
        {
            return Some(format!(
                "Your compiler does not know the {} standard.\nA newer gcc (14+) is required.",
                "C23/C++23".bold().yellow()
            ));
        }

        None
    }
}

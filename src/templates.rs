//! Files written by `ccc init`.

use crate::config::Language;

pub fn main_source(language: Language) -> &'static str {
    match language {
        Language::C => {
            r#"#include <stdio.h>
#include <stdlib.h>

int main(int argc, char *argv[]) {
    printf("Hello, World!\n");
    return 0;
}
"#
        }
        Language::Cpp => {
            r#"#include <iostream>
#include <string>
#include <vector>

int main(int argc, char *argv[]) {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}
"#
        }
    }
}

/// clangd settings; the `-std` flag follows the language.
pub fn clangd(language: Language) -> String {
    format!(
        r#"CompileFlags:
  Add:
    - -std={std}
    - -Wall
    - -Wextra
    - -Wpedantic
    - -Werror
    - -O2
    - -I../include
  Remove:
    - -W*

Diagnostics:
  ClangTidy:
    Add:
      - modernize-*
      - bugprone-*
      - performance-*
      - readability-*
    Remove:
      - modernize-use-trailing-return-type
      - readability-magic-numbers

Index:
  Background: Build

Style:
  FullyQualifiedNamespaces: No
"#,
        std = crate::build::toolchain::standard(language)
    )
}

pub const CLANG_FORMAT: &str = r#"BasedOnStyle: LLVM
IndentWidth: 4
TabWidth: 4
UseTab: Never
BreakBeforeBraces: Attach
AllowShortIfStatementsOnASingleLine: false
AllowShortLoopsOnASingleLine: false
AllowShortFunctionsOnASingleLine: None
AllowShortBlocksOnASingleLine: false
IndentCaseLabels: true
ColumnLimit: 100
PointerAlignment: Right
SpaceAfterCStyleCast: false
SpacesInParentheses: false
SpacesInSquareBrackets: false
SpaceBeforeAssignmentOperators: true
ContinuationIndentWidth: 4
AlignTrailingComments: true
AlignConsecutiveAssignments: false
AlignConsecutiveDeclarations: false
SortIncludes: true
IncludeBlocks: Regroup
IncludeCategories:
  - Regex: '^<.*\.h>'
    Priority: 1
  - Regex: '^<.*>'
    Priority: 2
  - Regex: '.*'
    Priority: 3
"#;

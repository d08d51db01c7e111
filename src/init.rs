//! `ccc init`: one-shot project skeleton.
//!
//! Creates the directory layout and starter files, then records the
//! language in `.ccc_config`. Existing sources are never overwritten.

use crate::config::{self, Language};
use crate::layout;
use crate::templates;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub fn init_project(root: &Path, language: Language) -> Result<()> {
    for dir in [
        Path::new(layout::SRC_DIR).to_path_buf(),
        Path::new(layout::INCLUDE_DIR).to_path_buf(),
        Path::new(layout::BIN_DIR).to_path_buf(),
        layout::obj_dir(),
    ] {
        fs::create_dir_all(root.join(&dir))
            .with_context(|| format!("Failed to create {}/", dir.display()))?;
    }

    let main_path = root.join(layout::SRC_DIR).join(language.main_file());
    if main_path.exists() {
        println!(
            "{} {} already exists, leaving it alone",
            "!".yellow(),
            main_path.display()
        );
    } else {
        fs::write(&main_path, templates::main_source(language))
            .with_context(|| format!("Failed to write {}", main_path.display()))?;
    }

    fs::write(root.join(".clangd"), templates::clangd(language))
        .context("Failed to write .clangd")?;
    fs::write(root.join(".clang-format"), templates::CLANG_FORMAT)
        .context("Failed to write .clang-format")?;
    fs::write(root.join(layout::COMPILE_COMMANDS), "[]")
        .context("Failed to write compile_commands.json")?;
    config::save(root, language).context("Failed to write .ccc_config")?;

    println!(
        "{} Project initialized successfully! ({})",
        "✓".green(),
        language.to_string().bold()
    );
    println!("Structure created:");
    println!("  src/       - Source files");
    println!("  include/   - Header files");
    println!("  bin/       - Binary output");
    println!("  bin/obj/   - Object files");
    println!("\nConfiguration files created:");
    println!("  .clangd");
    println!("  .clang-format");
    println!("  compile_commands.json");
    Ok(())
}

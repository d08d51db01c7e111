//! Build artifact cleanup.
//!
//! `ccc clean` removes the object files in `bin/obj/` and `bin/main`. The
//! directories themselves, `compile_commands.json` and `.ccc_config` stay.

use crate::layout;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Returns how many files were removed.
pub fn clean(root: &Path) -> Result<usize> {
    let mut removed = 0;

    let obj_dir = root.join(layout::obj_dir());
    if obj_dir.is_dir() {
        for entry in fs::read_dir(&obj_dir).context("Failed to read bin/obj")? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "o") {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }
    }

    let exe = root.join(layout::executable());
    if exe.is_file() {
        fs::remove_file(&exe).context("Failed to remove bin/main")?;
        removed += 1;
    }

    if removed > 0 {
        println!("{} Removed {} file(s).", "✓".green(), removed);
    } else {
        println!("{} Nothing to clean", "!".yellow());
    }
    Ok(removed)
}

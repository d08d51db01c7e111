//! Incremental build pipeline.
//!
//! One `ccc build` walks `LoadConfig -> Scan -> WriteDb -> CompileLoop ->
//! Link -> Done`, stopping at the first failure. Nothing is cached between
//! runs except the modification times of files on disk.

mod clean;
pub mod compdb;
mod compile;
mod core;
pub mod feedback;
mod link;
pub mod scan;
pub mod stale;
pub mod toolchain;

pub use clean::clean;
pub use compile::compile;
pub use self::core::{BuildOptions, BuildReport, Stage, build_project, run_pipeline};
pub use link::link;
pub use scan::{SourceRecord, scan};
pub use stale::{is_stale, mtime_or_epoch};
pub use toolchain::{Invocation, Runner, SystemRunner, ToolOutput};

//! # ccc - incremental builds for small C/C++ projects
//!
//! `ccc` keeps a single-directory C or C++ project compiled: it finds the
//! sources in `src/`, recompiles the ones newer than their objects, keeps
//! `compile_commands.json` current for editors and always relinks `bin/main`.
//!
//! ## Quick Start
//!
//! ```bash
//! ccc init --lang c
//! ccc -l "m,pthread"
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - The build pipeline (scan, staleness, database, compile, link)
//! - [`config`] - `.ccc_config` and per-invocation project settings
//! - [`layout`] - Fixed project directory layout and object naming
//! - [`error`] - Fatal build errors
//! - [`init`] - Project skeleton creation
//!
//! Two concurrent builds of the same project are not coordinated; they can
//! race on object files and `compile_commands.json`.

/// Incremental build pipeline.
pub mod build;

/// Project settings (`.ccc_config`, library lists).
pub mod config;

/// Build failure taxonomy.
pub mod error;

/// `ccc init` project skeleton.
pub mod init;

/// Directory layout of a `ccc` project.
pub mod layout;

/// Starter files written by `ccc init`.
pub mod templates;

//! Core library for testgen
//!
//! This crate implements the **Functional Core** of the testgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`testgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`testgen`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions here are deterministic, side-effect free, and testable with
//! simple fixture data: grouping already-enumerated paths, assembling prompt
//! text from already-read file contents, and shaping run reports. Directory
//! walking, file reads, and the completion request itself live in the shell.
//!
//! # Module Organization
//!
//! - [`sources`]: Source file filtering and base-name grouping
//! - [`prompt`]: Combined-source and completion message assembly
//! - [`report`]: Run report shaping for text and JSON output

pub mod prompt;
pub mod report;
pub mod sources;

pub use prompt::{build_user_message, combine_sources, SourceFile};
pub use report::{transform_run_results, ComponentReport, GenerationReport};
pub use sources::{group_by_base_name, has_source_extension, SOURCE_EXTENSIONS};

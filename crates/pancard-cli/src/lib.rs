//! # pancard-cli — PAN Command-Line Interface
//!
//! Provides the `pancard` binary. Argument parsing and output formatting
//! live here; every decision about validity comes from `pancard-core`.
//!
//! ## Modes
//!
//! - `pancard <PAN> --validate` — strict validation, exit 1 on rejection.
//! - `pancard <PAN> --decode` — diagnostic breakdown (the default mode).
//! - `pancard <PAN> --summary` — one-sentence description.
//! - `--json` switches any mode to JSON output.
//!
//! ```bash
//! pancard ABCPE1234K
//! pancard abcpe1234k --validate --json
//! pancard ABCP12345 --summary
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers write to a caller-supplied `Write` so output is testable.
//! - Logs go to stderr; stdout carries only the requested output.

pub mod check;
pub mod render;

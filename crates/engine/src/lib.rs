//! Caller-level composition on top of the core engine
//!
//! The core exposes single steps (`tick`, moves, rotate). This crate builds
//! what drivers actually issue: named [`Command`]s, hard drops, command
//! scripts and scripted replays. Nothing here performs I/O either; the
//! binary owns files and terminals.

pub mod command;
pub mod replay;
pub mod script;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use command::{apply, hard_drop};
pub use replay::{replay, ReplaySummary, Step};
pub use script::{parse_script, ScriptError};

pub use blockfall_types::Command;

//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so tests, benches
//! and the binary can write `blockfall::core::GameState` and friends.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

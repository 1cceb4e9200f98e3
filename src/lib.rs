//! Console game engine (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `cge::{types, core, input, engine, term}`; the implementation lives in the
//! dedicated crates under `crates/`.

pub use cge_core as core;
pub use cge_engine as engine;
pub use cge_input as input;
pub use cge_term as term;
pub use cge_types as types;

//! Resume generation: deterministic base structure, prompt composition,
//! model invocation, and positional reconciliation, plus persistence and
//! HTTP handlers.

pub mod base;
pub mod dates;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod reconcile;
pub mod store;

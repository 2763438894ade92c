//! Demo runners wiring the sandbox core end to end.

pub mod maxcut;

pub use maxcut::{MaxCutResult, MaxCutRunner};

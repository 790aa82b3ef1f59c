//! Cross-crate tests for lotkeeper. Everything here drives the public API of
//! `lotkeeper-core` the way the CLI does.

pub mod support;

mod properties;

// crates/linefix-cli/src/cmd/mod.rs

pub mod rewrite;
pub mod rules;

//! Subcommand modules for the `norf` binary.

pub mod find;
pub mod rc;
pub mod tsv;

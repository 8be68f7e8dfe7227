//! CLI subcommand implementations.

pub mod project;
pub mod rate;
pub mod timeline;
pub mod util;

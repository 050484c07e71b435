#![forbid(unsafe_code)]
//! ctxwalk — walk a codebase and emit one Markdown document of its contents.

pub mod cli;
pub mod ignore;
pub mod render;
pub mod scan;
pub mod vcs;

use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ctxwalk",
    version,
    about = "Generate Markdown documentation for a codebase"
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Ignore-rules file path, or a literal newline-separated pattern string
    #[arg(short = 'i', long = "ignore")]
    pub ignore: Option<String>,

    /// Output Markdown file path
    #[arg(short = 'o', long = "output", default_value = "PROJECT_CONTEXT.md")]
    pub output: PathBuf,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the completion message
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Resolve the `--ignore` argument into a pattern list.
///
/// If the argument names an existing file it is read as a rules file (one
/// glob pattern per line, blank lines and `#` comments skipped). Otherwise
/// the argument itself is split on newlines, skipping blanks.
pub fn load_ignore_rules(arg: &str) -> io::Result<Vec<String>> {
    let path = Path::new(arg);
    if path.exists() {
        Ok(parse_rules_file(&fs::read_to_string(path)?))
    } else {
        Ok(parse_rules_literal(arg))
    }
}

/// Parse rules-file content: blank lines and lines starting with `#` are skipped.
pub fn parse_rules_file(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Parse a literal newline-separated pattern string: blank lines are skipped.
pub fn parse_rules_literal(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

//! Binary/text classification and per-file Markdown rendering.

use std::fs;
use std::io::Read;
use std::path::Path;

/// How many leading bytes the default sniffer inspects.
const SNIFF_LEN: usize = 8192;

/// Binary/text classification capability.
///
/// The heuristic is pluggable so a more sophisticated sniffer can be swapped
/// in without touching the orchestrator.
pub trait ContentSniffer {
    fn is_binary(&self, path: &Path) -> bool;
}

/// Default sniffer: NUL byte or a high ratio of non-text bytes in the
/// leading chunk classifies the file as binary.
pub struct ByteSniffer;

impl ContentSniffer for ByteSniffer {
    fn is_binary(&self, path: &Path) -> bool {
        let mut buf = [0u8; SNIFF_LEN];
        let Ok(mut file) = fs::File::open(path) else {
            // Unreadable: let the renderer surface the read error instead.
            return false;
        };
        let Ok(n) = file.read(&mut buf) else {
            return false;
        };
        looks_binary(&buf[..n])
    }
}

/// Classify a byte chunk: any NUL byte, or more than 30% bytes outside the
/// printable-ASCII/whitespace range, means binary.
pub fn looks_binary(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    if bytes.contains(&0) {
        return true;
    }
    let suspicious = bytes
        .iter()
        .filter(|&&b| b < 0x09 || (0x0e..0x20).contains(&b) || b == 0x7f)
        .count();
    suspicious * 100 > bytes.len() * 30
}

/// Language tag for a fenced code block: lowercase extension without the
/// dot, or `text` when the file has none.
pub fn language_tag(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "text".to_string())
}

/// Render one file as a Markdown section.
///
/// Produces exactly one of three shapes: a fenced code block for text files,
/// a `> Binary file` placeholder, or a `> Read error` placeholder. A failed
/// read never propagates; the failure stays visible in the document.
pub fn render_file(abs_path: &Path, rel_path: &Path, sniffer: &dyn ContentSniffer) -> String {
    let rel = rel_path.display();
    if sniffer.is_binary(abs_path) {
        return format!("## `{rel}`\n\n> Binary file\n\n");
    }
    match fs::read(abs_path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            let language = language_tag(abs_path);
            format!("## `{rel}`\n\n```{language}\n{content}\n```\n\n")
        }
        Err(e) => format!("## `{rel}`\n\n> Read error: {e}\n\n"),
    }
}

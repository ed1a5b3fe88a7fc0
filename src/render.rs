//! Plain-text tree rendering with optional crossterm styling.

use crate::tree::{flatten, Directory, TreeLine};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Configuration for the rendering pipeline.
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Format a single row, styling directory names when color is on.
pub fn format_line(line: &TreeLine, config: &RenderConfig) -> String {
    let name = sanitize_terminal_text(&line.name);
    if line.is_dir && config.use_color {
        format!("{}{}", line.prefix, name.blue().bold())
    } else {
        format!("{}{}", line.prefix, name)
    }
}

/// `N directories, M files`, counted over the whole tree.
pub fn summary_line(root: &Directory) -> String {
    let dirs = root.count_directories(true);
    let files = root.count_files(true);
    format!(
        "{} {}, {} {}",
        dirs,
        if dirs == 1 { "directory" } else { "directories" },
        files,
        if files == 1 { "file" } else { "files" }
    )
}

/// Write the root name, every row, and the summary line.
pub fn render_tree<W: Write>(
    writer: &mut W,
    root: &Directory,
    config: &RenderConfig,
) -> io::Result<()> {
    let title = sanitize_terminal_text(&root.path().to_string_lossy());
    if config.use_color {
        writeln!(writer, "{}", title.blue().bold())?;
    } else {
        writeln!(writer, "{}", title)?;
    }
    for line in flatten(root) {
        writeln!(writer, "{}", format_line(&line, config))?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", summary_line(root))
}

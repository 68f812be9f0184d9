//! Printing listed entries
//!
//! Text output is one tab-separated line per entry. Directory paths are
//! highlighted when color is enabled; the bytes are otherwise identical.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walker::{Entry, EntryKind};

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub json: bool,
}

/// Print entries to stdout in the configured format.
pub fn print_entries(entries: &[Entry], config: &OutputConfig) -> io::Result<()> {
    if config.json {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        return write_json(&mut lock, entries);
    }

    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_text(&mut stdout, entries)
}

/// `KIND<TAB>PERMS<TAB>SIZE<TAB>PATH`, one entry per line.
pub fn write_text<W: WriteColor>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        write!(
            out,
            "{}\t{}\t{}\t",
            entry.kind.tag(),
            entry.permissions,
            entry.size
        )?;
        if entry.kind == EntryKind::Dir {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", entry.path)?;
            out.reset()?;
        } else {
            write!(out, "{}", entry.path)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries).map_err(io::Error::other)?;
    writeln!(out)
}

// Console and JSON output for search results

use std::io::{self, Write};

use serde::Serialize;

/// Unit the reported offsets count in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    Byte,
    Char,
}

/// Machine-readable result of one search, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub pattern: &'a str,
    pub text_len: usize,
    pub unit: OffsetUnit,
    pub matches: &'a [usize],
}

pub fn write_json<W: Write>(out: &mut W, report: &SearchReport<'_>) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// One line per match, or the not-found line.
pub fn write_matches<W: Write>(out: &mut W, offsets: &[usize]) -> io::Result<()> {
    if offsets.is_empty() {
        return writeln!(out, "Pattern not found!");
    }
    let mut buf = itoa::Buffer::new();
    for &offset in offsets {
        writeln!(out, "Pattern occurs at index = {}", buf.format(offset))?;
    }
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "============= Boyer-Moore Algorithm ==============")?;
    writeln!(out, "| 1. View Example of String Matching             |")?;
    writeln!(out, "| 2. Input Pattern and Text for Search           |")?;
    writeln!(out, "==================================================")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

pub fn write_example<W: Write>(
    out: &mut W,
    text: &str,
    pattern: &str,
    offsets: &[usize],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "============= Example Searching ==============")?;
    writeln!(out, "Text: {}", text)?;
    writeln!(out, "Pattern: {}", pattern)?;
    write_matches(out, offsets)?;
    writeln!(out)
}

pub fn write_round<W: Write>(
    out: &mut W,
    round: usize,
    text: &str,
    pattern: &str,
    offsets: &[usize],
) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    writeln!(
        out,
        "============ Pattern Searching #{} ============",
        buf.format(round)
    )?;
    writeln!(out, "Generated text: {}", text)?;
    writeln!(out, "Generated pattern: {}", pattern)?;
    write_matches(out, offsets)?;
    writeln!(out)
}

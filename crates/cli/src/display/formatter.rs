use anyhow::Result;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::commands::FileReport;

/// Render reports as plain text, one rendered call per line
pub fn format_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let extraction = &report.extraction;
        writeln!(out, "{}", report.path.display()).ok();
        for call in &extraction.calls {
            writeln!(out, "  {call}").ok();
        }
        for skipped in &extraction.skipped {
            writeln!(
                out,
                "  skipped {} [{}]: {}",
                skipped.location, skipped.kind, skipped.error
            )
            .ok();
        }
        writeln!(out, "Found {} function calls.", extraction.calls.len()).ok();
    }
    out
}

/// Write the text rendering, surfacing a closed pipe as an error
pub fn write_text<W: Write>(writer: &mut W, reports: &[FileReport]) -> io::Result<()> {
    writer.write_all(format_text(reports).as_bytes())?;
    writer.flush()
}

pub fn write_json<W: Write>(writer: &mut W, reports: &[FileReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, reports)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn print_text(reports: &[FileReport]) -> Result<()> {
    write_text(&mut io::stdout().lock(), reports)?;
    Ok(())
}

pub fn print_json(reports: &[FileReport]) -> Result<()> {
    write_json(&mut io::stdout().lock(), reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use starquery_core::query_source;
    use std::path::PathBuf;

    /// Writer standing in for stdout after the reader hung up
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn reports() -> Vec<FileReport> {
        let extraction = query_source("foo(name = \"bar\")\na.b(x = \"y\")\n").unwrap();
        vec![FileReport {
            path: PathBuf::from("BUILD"),
            extraction,
        }]
    }

    #[test]
    fn test_format_text() {
        assert_eq!(
            format_text(&reports()),
            "BUILD\n\
             \x20 Function foo, line 1, 1 arguments: [name = bar]\n\
             \x20 skipped 2:0 [CalleeNotIdentifier]: function name is not an identifier (found attribute)\n\
             Found 1 function calls.\n"
        );
    }

    #[test]
    fn test_write_text_to_buffer() {
        let mut buffer = Vec::new();
        write_text(&mut buffer, &reports()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), format_text(&reports()));
    }

    #[test]
    fn test_closed_pipe_is_an_error() {
        let err = write_text(&mut ClosedPipe, &reports()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(write_json(&mut ClosedPipe, &reports()).is_err());
    }

    #[test]
    fn test_write_json() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &reports()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json[0]["path"], "BUILD");
        assert_eq!(json[0]["calls"][0]["name"], "foo");
        assert_eq!(json[0]["skipped"][0]["kind"], "CalleeNotIdentifier");
    }
}

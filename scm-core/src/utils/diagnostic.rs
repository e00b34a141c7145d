use std::io::Write;
use std::path::PathBuf;

use codespan_reporting::{
    diagnostic::{Diagnostic as CodespanDiagnostic, Label},
    files::SimpleFile,
    term::{self, Config},
};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::src_span::SrcSpan;

/// The piece of source a diagnostic points at.
pub struct Location<'a> {
    pub src: &'a str,
    pub path: PathBuf,
    pub span: SrcSpan,
    pub message: String,
}

impl Location<'_> {
    // codespan panics on ranges past the end of the file
    fn range(&self) -> std::ops::Range<usize> {
        let len = self.src.len();
        let start = (self.span.start as usize).min(len);
        let end = (self.span.end as usize).clamp(start, len);

        start..end
    }
}

/// An error report: headline, optional source excerpt and trailing notes.
pub struct Diagnostic<'a> {
    pub title: String,
    pub notes: Vec<String>,
    pub location: Option<Location<'a>>,
}

impl Diagnostic<'_> {
    pub fn write(&self, buf: &mut Buffer) -> std::io::Result<()> {
        match &self.location {
            Some(location) => self.write_excerpt(location, buf),
            None => self.write_plain(buf),
        }
    }

    fn write_excerpt(&self, location: &Location, buf: &mut Buffer) -> std::io::Result<()> {
        let file = SimpleFile::new(location.path.to_string_lossy(), location.src);

        let diagnostic = CodespanDiagnostic::error()
            .with_message(&self.title)
            .with_labels(vec![Label::primary((), location.range()).with_message(&location.message)])
            .with_notes(self.notes.clone());

        term::emit(buf, &Config::default(), &file, &diagnostic)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
    }

    fn write_plain(&self, buf: &mut Buffer) -> std::io::Result<()> {
        buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
        write!(buf, "error")?;

        buf.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(buf, ": {}", self.title)?;
        buf.set_color(&ColorSpec::new())?;

        for note in &self.notes {
            writeln!(buf, "  = {note}")?;
        }

        Ok(())
    }
}

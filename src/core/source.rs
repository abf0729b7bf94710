//! Producers of equation text. Manual entry, files and OCR transcriptions all
//! arrive as untrusted raw lines and go through the same `solve` path.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub trait EquationSource {
    /// Next equation, or `None` once the source is exhausted.
    fn next_equation(&mut self) -> io::Result<Option<String>>;
}

/// One equation per line. Blank lines and `#` comments are skipped.
pub struct LineSource<R: BufRead> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// 1-based number of the line most recently returned.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> EquationSource for LineSource<R> {
    fn next_equation(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
    }
}

/// In-memory queue, e.g. text already recognized from an image.
#[derive(Debug, Default, Clone)]
pub struct VecSource {
    items: VecDeque<String>,
}

impl VecSource {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { items: items.into_iter().map(Into::into).collect() }
    }
}

impl EquationSource for VecSource {
    fn next_equation(&mut self) -> io::Result<Option<String>> {
        Ok(self.items.pop_front())
    }
}

/// Drain a source into a vector.
pub fn collect_all(source: &mut dyn EquationSource) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    while let Some(eq) = source.next_equation()? {
        out.push(eq);
    }
    Ok(out)
}

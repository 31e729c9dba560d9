use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};
use crate::matcher::reduce_forbidden;
use crate::types::QueryBatch;

/// Upper bound on up-front allocation driven by a count line.
const MAX_PREALLOC: usize = 1 << 16;

/// Line reader that tracks 1-based line numbers for error reporting.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next line without its `\n` / `\r\n` terminator.
    ///
    /// Lines are raw bytes; they need not be valid UTF-8.
    pub fn next_line(&mut self, expected: &str) -> Result<&[u8]> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(CheckerError::UnexpectedEof {
                line: self.line + 1,
                expected: expected.to_string(),
            });
        }
        self.line += 1;

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(&self.buf)
    }

    /// Read a line holding a single non-negative integer.
    pub fn read_count(&mut self, what: &str) -> Result<usize> {
        self.next_line(what)?;
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim();
        text.parse::<usize>()
            .map_err(|_| CheckerError::MalformedInput {
                line: self.line,
                message: format!("expected {}, got '{}'", what, text),
            })
    }

    /// Read exactly `count` domain lines.
    ///
    /// With `reduce` set the result is sorted and every domain covered by an
    /// earlier one is dropped; otherwise input order is kept.
    pub fn read_domains(&mut self, count: usize, reduce: bool) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            domains.push(Domain::new(self.next_line("domain name")?));
        }

        if reduce {
            domains = reduce_forbidden(domains);
        }
        Ok(domains)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Read `count` domain lines from `reader`; see [`LineReader::read_domains`].
pub fn read_domains<R: BufRead>(reader: R, count: usize, reduce: bool) -> Result<Vec<Domain>> {
    LineReader::new(reader).read_domains(count, reduce)
}

/// Read a full batch: forbidden count, forbidden domains, query count, queries.
pub fn read_batch<R: BufRead>(reader: R) -> Result<QueryBatch> {
    let mut lines = LineReader::new(reader);

    let forbidden_count = lines.read_count("forbidden domain count")?;
    let forbidden = lines.read_domains(forbidden_count, true)?;

    let query_count = lines.read_count("query count")?;
    let queries = lines.read_domains(query_count, false)?;

    tracing::debug!(
        forbidden_count,
        reduced = forbidden.len(),
        query_count,
        "read query batch"
    );

    Ok(QueryBatch { forbidden, queries })
}

/// Parse a full batch from text.
pub fn parse_batch(text: &str) -> Result<QueryBatch> {
    read_batch(text.as_bytes())
}

/// Parse a plain domain list.
///
/// One domain per line; `#` starts a comment; whitespace around entries is
/// trimmed and blank lines are skipped. The result is not reduced.
pub fn parse_domain_list(text: &str) -> Vec<Domain> {
    text.lines()
        .map(|line| match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Domain::new)
        .collect()
}

/// Parse a plain domain list from a file; see [`parse_domain_list`].
pub fn parse_domain_list_from_file(path: impl AsRef<Path>) -> Result<Vec<Domain>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CheckerError::ListFile {
        path: path.to_path_buf(),
        source,
    })?;
    let domains = parse_domain_list(&text);
    tracing::debug!(path = %path.display(), count = domains.len(), "loaded domain list");
    Ok(domains)
}

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use domain_checker::{Domain, QueryResult, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// one `Bad`/`Good` line per query
    Text,
    /// one JSON object per query (NDJSON)
    Json,
}

/// Write one line per query, in query order.
///
/// `with_names` prefixes text lines with the queried domain; batch mode keeps
/// the bare `Bad`/`Good` lines.
pub fn write_verdicts<W: Write>(
    out: &mut W,
    format: OutputFormat,
    queries: &[Domain],
    verdicts: &[Verdict],
    with_names: bool,
) -> Result<()> {
    debug_assert_eq!(queries.len(), verdicts.len());

    for (domain, verdict) in queries.iter().zip(verdicts) {
        match format {
            OutputFormat::Text if with_names => writeln!(out, "{}\t{}", domain, verdict)?,
            OutputFormat::Text => writeln!(out, "{}", verdict)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &QueryResult::new(domain, *verdict))?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

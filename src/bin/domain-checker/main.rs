use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{bail, Context, Result};
use domain_checker::{
    parse_domain_list_from_file, read_batch, Domain, DomainFilter, Filter, FilterStrategy,
    ForbiddenSet, QueryBatch,
};

mod args;
mod logging;
mod output;

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "starting domain-checker");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&cli, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.cmd {
        Some(Commands::Check { forbidden, domains }) => {
            if let Some(input) = &cli.input {
                bail!(
                    "--input '{}' cannot be combined with `check`; use --forbidden",
                    input.display()
                );
            }
            let list = parse_domain_list_from_file(forbidden)?;
            let filter = Filter::build(cli.strategy, list);
            let queries: Vec<Domain> = domains.iter().map(Domain::new).collect();
            check(out, cli, &filter, &queries, true)
        }
        None => {
            let batch = read_input(cli)?;
            let filter = match cli.strategy {
                // read_batch already reduced the list
                FilterStrategy::Sorted => {
                    Filter::Sorted(ForbiddenSet::from_reduced(batch.forbidden))
                }
                FilterStrategy::Trie => Filter::build(FilterStrategy::Trie, batch.forbidden),
            };
            check(out, cli, &filter, &batch.queries, false)
        }
    }
}

fn read_input(cli: &Cli) -> Result<QueryBatch> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open input '{}'", path.display()))?;
            read_batch(BufReader::new(file))
                .with_context(|| format!("read batch from '{}'", path.display()))
        }
        None => read_batch(io::stdin().lock()).context("read batch from stdin"),
    }
}

fn check<W: Write>(
    out: &mut W,
    cli: &Cli,
    filter: &Filter,
    queries: &[Domain],
    with_names: bool,
) -> Result<()> {
    let verdicts = filter.check_all(queries);
    let bad = verdicts.iter().filter(|v| v.is_forbidden()).count();
    tracing::debug!(
        strategy = %cli.strategy,
        forbidden = filter.len(),
        queries = queries.len(),
        bad,
        "checked queries"
    );

    output::write_verdicts(out, cli.format, queries, &verdicts, with_names)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn run_to_string(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_check_subcommand_writes_named_verdicts() {
        let list = temp_file(b"# trackers\nevil.com\n");
        let path = list.path().to_str().unwrap();

        for strategy in ["sorted", "trie"] {
            let output = run_to_string(&[
                "domain-checker",
                "--strategy",
                strategy,
                "check",
                "--forbidden",
                path,
                "a.evil.com",
                "good.com",
            ])
            .unwrap();
            assert_eq!(output, "a.evil.com\tBad\ngood.com\tGood\n", "strategy {strategy}");
        }
    }

    #[test]
    fn test_check_subcommand_missing_list() {
        let err = run_to_string(&[
            "domain-checker",
            "check",
            "--forbidden",
            "/nonexistent/forbidden.txt",
            "a.com",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/forbidden.txt"), "got: {err}");
    }

    #[test]
    fn test_input_with_check_is_rejected() {
        let list = temp_file(b"evil.com\n");
        let batch = temp_file(b"0\n0\n");
        let err = run_to_string(&[
            "domain-checker",
            "--input",
            batch.path().to_str().unwrap(),
            "check",
            "--forbidden",
            list.path().to_str().unwrap(),
            "a.com",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("cannot be combined"), "got: {err}");
    }

    #[test]
    fn test_batch_from_input_file() {
        let batch = temp_file(b"2\ncom\nexample.net\n3\nmail.com\nnet\ncaf\xe9.example.net\n");
        let path = batch.path().to_str().unwrap();

        let output = run_to_string(&["domain-checker", "--input", path]).unwrap();
        assert_eq!(output, "Bad\nGood\nBad\n");

        let output =
            run_to_string(&["domain-checker", "--input", path, "--strategy", "trie"]).unwrap();
        assert_eq!(output, "Bad\nGood\nBad\n");
    }
}

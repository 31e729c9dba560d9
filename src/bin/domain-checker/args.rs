use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain_checker::FilterStrategy;

use crate::output::OutputFormat;

/// Flags each domain that equals, or lies below, a forbidden domain.
///
/// Without a subcommand, reads a batch from stdin (or --input):
/// a count N, N forbidden domains, a count M, M queries.
/// Prints one `Bad`/`Good` line per query.
#[derive(Parser, Debug)]
#[command(name = "domain-checker", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read the batch from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// filter strategy: sorted|trie
    #[arg(long, default_value = "sorted", global = true)]
    pub strategy: FilterStrategy,

    /// debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check domains given as arguments against a forbidden list file
    Check {
        /// list file: one domain per line, `#` comments
        #[arg(long, short, value_name = "FILE")]
        forbidden: PathBuf,
        /// domains to check
        #[arg(required = true)]
        domains: Vec<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["domain-checker"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.strategy, FilterStrategy::Sorted);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from([
            "domain-checker",
            "check",
            "--forbidden",
            "list.txt",
            "--strategy",
            "trie",
            "a.com",
            "b.org",
        ])
        .unwrap();

        assert_eq!(cli.strategy, FilterStrategy::Trie);
        match cli.cmd {
            Some(Commands::Check { forbidden, domains }) => {
                assert_eq!(forbidden, PathBuf::from("list.txt"));
                assert_eq!(domains, vec!["a.com", "b.org"]);
            }
            None => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["domain-checker", "--strategy", "hash"]).is_err());
    }
}

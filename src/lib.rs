//! Domain Checker - forbidden-domain lookups for Rust
//!
//! Decides for each query domain whether it equals, or is a subdomain of, an
//! entry in a forbidden list:
//! - Domains compare by their reversed form (`mail.example.com` →
//!   `moc.elpmaxe.liam.`), so "is a subdomain of" becomes "starts with"
//! - The forbidden list is sorted and reduced: entries covered by a shorter
//!   forbidden ancestor are dropped
//! - Each query is one binary search plus one prefix test
//! - A label trie is available as an alternative strategy
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainFilter, ForbiddenSet, Verdict};
//!
//! let forbidden: ForbiddenSet = ["example.com", "example.net", "mail.example.com"]
//!     .into_iter()
//!     .collect();
//! assert_eq!(forbidden.len(), 2);
//!
//! let queries: Vec<Domain> = ["mail.example.com", "example.com.evil", "a.example.net"]
//!     .into_iter()
//!     .map(Domain::new)
//!     .collect();
//!
//! assert_eq!(
//!     forbidden.check_all(&queries),
//!     vec![Verdict::Bad, Verdict::Good, Verdict::Bad]
//! );
//! ```
//!
//! # Batch Input
//!
//! [`read_batch`] reads the line-oriented stream used by the CLI:
//!
//! ```text
//! N             forbidden domain count
//! <N lines>     forbidden domains, no leading dot
//! M             query count
//! <M lines>     query domains
//! ```
//!
//! Each query is answered with `Bad` (forbidden) or `Good`.
//!
//! No case folding, IDNA decoding or label validation is done: names are
//! matched exactly as given.

pub mod domain;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use domain::Domain;
pub use error::{CheckerError, InputErrorKind, Result};
pub use matcher::{
    reduce_forbidden, DomainChecker, DomainFilter, Filter, FilterStrategy, ForbiddenSet, LabelTrie,
};
pub use parser::{
    parse_batch, parse_domain_list, parse_domain_list_from_file, read_batch, read_domains,
    LineReader,
};
pub use types::{QueryBatch, QueryResult, Verdict};

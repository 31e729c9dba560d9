mod sorted;
mod trie;

pub use sorted::{reduce_forbidden, DomainChecker, ForbiddenSet};
pub use trie::LabelTrie;

use std::fmt;
use std::str::FromStr;

use crate::domain::Domain;
use crate::error::CheckerError;
use crate::types::Verdict;

/// Trait for forbidden-domain filters
pub trait DomainFilter: Send + Sync {
    /// Check if the domain equals or lies below a forbidden domain
    fn is_forbidden(&self, domain: &Domain) -> bool;

    /// Answer a batch of queries in order
    fn check_all<'a, I>(&self, queries: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = &'a Domain>,
        Self: Sized,
    {
        queries
            .into_iter()
            .map(|domain| Verdict::from_forbidden(self.is_forbidden(domain)))
            .collect()
    }
}

/// Which filter implementation answers queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Reduced sorted set with one binary search per query
    #[default]
    Sorted,
    /// Trie keyed by label, walked from the root label down
    Trie,
}

impl FromStr for FilterStrategy {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" => Ok(FilterStrategy::Sorted),
            "trie" => Ok(FilterStrategy::Trie),
            other => Err(CheckerError::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for FilterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStrategy::Sorted => f.write_str("sorted"),
            FilterStrategy::Trie => f.write_str("trie"),
        }
    }
}

/// Enum wrapper for all filter types
#[derive(Debug, Clone)]
pub enum Filter {
    Sorted(ForbiddenSet),
    Trie(LabelTrie),
}

impl Filter {
    /// Build a filter of the given strategy from raw (unreduced) forbidden domains.
    pub fn build(strategy: FilterStrategy, forbidden: Vec<Domain>) -> Self {
        match strategy {
            FilterStrategy::Sorted => Filter::Sorted(ForbiddenSet::new(forbidden)),
            FilterStrategy::Trie => Filter::Trie(LabelTrie::new(forbidden)),
        }
    }

    /// Number of forbidden domains left after reduction
    pub fn len(&self) -> usize {
        match self {
            Filter::Sorted(f) => f.len(),
            Filter::Trie(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainFilter for Filter {
    fn is_forbidden(&self, domain: &Domain) -> bool {
        match self {
            Filter::Sorted(f) => f.is_forbidden(domain),
            Filter::Trie(f) => f.is_forbidden(domain),
        }
    }
}

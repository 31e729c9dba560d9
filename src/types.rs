use std::fmt;

use serde::Serialize;

use crate::domain::Domain;

/// Answer for a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// Equal to or below some forbidden domain
    Bad,
    /// Not forbidden
    Good,
}

impl Verdict {
    pub fn from_forbidden(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }

    pub fn is_forbidden(self) -> bool {
        matches!(self, Verdict::Bad)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query paired with its verdict, as emitted by the JSON output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub domain: String,
    pub verdict: Verdict,
}

impl QueryResult {
    pub fn new(domain: &Domain, verdict: Verdict) -> Self {
        Self {
            domain: domain.name(),
            verdict,
        }
    }
}

/// Parsed batch input
#[derive(Debug, Clone, Default)]
pub struct QueryBatch {
    /// Sorted and reduced forbidden domains
    pub forbidden: Vec<Domain>,
    /// Queries in input order
    pub queries: Vec<Domain>,
}

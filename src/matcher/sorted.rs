//! Reduced sorted forbidden sets.
//!
//! After [`reduce_forbidden`] the set is ascending and no element lies below
//! another, so the only element that can cover a query is the greatest one
//! not exceeding it. A lookup is one binary search plus one prefix test.

use super::DomainFilter;
use crate::domain::Domain;

/// Sort `domains` and drop every entry covered by an ancestor already kept.
///
/// After sorting, an ancestor always precedes its descendants and the kept
/// entries never overlap, so comparing each entry with the last kept one is
/// enough. Exact duplicates are covered by the same check (reflexivity).
pub fn reduce_forbidden(mut domains: Vec<Domain>) -> Vec<Domain> {
    let before = domains.len();
    domains.sort_unstable();
    // dedup_by passes (current, last kept)
    domains.dedup_by(|current, kept| current.is_subdomain_of(kept));
    tracing::debug!(before, after = domains.len(), "reduced forbidden domains");
    domains
}

/// Read-only view over a reduced, sorted slice of forbidden domains.
///
/// The slice must come from [`reduce_forbidden`] (or be equivalent). This is
/// not re-checked: an unsorted or unreduced slice gives wrong answers, never
/// a panic. Use [`ForbiddenSet`] to have the invariant enforced.
#[derive(Debug, Clone, Copy)]
pub struct DomainChecker<'a> {
    to_check: &'a [Domain],
}

impl<'a> DomainChecker<'a> {
    pub fn new(to_check: &'a [Domain]) -> Self {
        Self { to_check }
    }

    /// True if `domain` equals or lies below a forbidden domain.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // Upper bound: first element strictly greater than the query
        let upper = self.to_check.partition_point(|d| d <= domain);
        match upper.checked_sub(1) {
            Some(prev) => domain.is_subdomain_of(&self.to_check[prev]),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.to_check.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_check.is_empty()
    }
}

impl DomainFilter for DomainChecker<'_> {
    fn is_forbidden(&self, domain: &Domain) -> bool {
        DomainChecker::is_forbidden(self, domain)
    }
}

/// Owning forbidden set; reduces its input on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForbiddenSet {
    domains: Vec<Domain>,
}

impl ForbiddenSet {
    pub fn new(domains: Vec<Domain>) -> Self {
        Self {
            domains: reduce_forbidden(domains),
        }
    }

    /// Wrap a sequence the caller has already reduced (e.g. the output of
    /// [`crate::parser::read_domains`] with `reduce` set).
    pub fn from_reduced(domains: Vec<Domain>) -> Self {
        debug_assert!(
            domains.windows(2).all(|w| w[0] < w[1] && !w[1].is_subdomain_of(&w[0])),
            "forbidden set is not reduced"
        );
        Self { domains }
    }

    pub fn checker(&self) -> DomainChecker<'_> {
        DomainChecker::new(&self.domains)
    }

    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        self.checker().is_forbidden(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.domains.iter()
    }

    pub fn as_slice(&self) -> &[Domain] {
        &self.domains
    }

    pub fn into_inner(self) -> Vec<Domain> {
        self.domains
    }
}

impl DomainFilter for ForbiddenSet {
    fn is_forbidden(&self, domain: &Domain) -> bool {
        ForbiddenSet::is_forbidden(self, domain)
    }
}

impl<D: Into<Domain>> FromIterator<D> for ForbiddenSet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ForbiddenSet {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

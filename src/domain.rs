//! Domain names in canonical reversed form.
//!
//! A [`Domain`] stores the bytes of `"." + name` reversed, so
//! `mail.example.com` becomes `moc.elpmaxe.liam.`. Two consequences follow:
//!
//! - "is a subdomain of" turns into "starts with" on the reversed form, and the
//!   separator (now trailing) forces that prefix to end on a label boundary
//!   (`evil.com` is not under `vil.com`).
//! - Sorting reversed forms places every domain directly before all of its
//!   subdomains.
//!
//! Names are handled as raw bytes, so input that is not valid UTF-8 still
//! builds a domain and matches by the same rule.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label separator.
pub const SEPARATOR: u8 = b'.';

/// A domain name compared by the reversed bytes of `"." + name`.
///
/// No validation is performed: any byte string is accepted and is matched by
/// the same textual rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    reversed: Vec<u8>,
}

impl Domain {
    /// Build a domain from a name without a leading dot, e.g. `mail.google.com`.
    pub fn new(raw: impl AsRef<[u8]>) -> Self {
        let raw = raw.as_ref();
        let mut reversed = Vec::with_capacity(raw.len() + 1);
        reversed.extend(raw.iter().rev());
        reversed.push(SEPARATOR);
        Self { reversed }
    }

    /// The canonical form used for ordering and prefix tests.
    #[inline]
    pub fn as_reversed(&self) -> &[u8] {
        &self.reversed
    }

    /// The raw bytes this domain was built from.
    pub fn name_bytes(&self) -> Vec<u8> {
        self.reversed.iter().rev().skip(1).copied().collect()
    }

    /// The name this domain was built from; invalid UTF-8 is replaced.
    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.name_bytes()).into_owned()
    }

    /// True if `self` equals `other` or lies below it. Reflexive.
    #[inline]
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        self.reversed.starts_with(&other.reversed)
    }

    /// Labels from the root label down (`mail.example.com` yields
    /// `com`, `example`, `mail`).
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.reversed_labels().map(|label| {
            let bytes: Vec<u8> = label.iter().rev().copied().collect();
            String::from_utf8_lossy(&bytes).into_owned()
        })
    }

    /// Labels from the root label down, each still byte-reversed.
    pub(crate) fn reversed_labels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // Drop the trailing separator
        self.reversed[..self.reversed.len() - 1].split(|b| *b == SEPARATOR)
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.reversed.cmp(&other.reversed)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Domain {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Domain {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for Domain {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<&[u8]> for Domain {
    fn from(raw: &[u8]) -> Self {
        Self::new(raw)
    }
}

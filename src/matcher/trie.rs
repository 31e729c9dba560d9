//! Label trie for forbidden-domain lookups.
//!
//! Nodes are keyed by label, starting at the root label (`com` for
//! `mail.example.com`). A query walks its own labels down the trie and is
//! forbidden as soon as it reaches a terminal node. Lookup cost depends on the
//! depth of the query rather than on the size of the set.

use std::collections::HashMap;

use super::DomainFilter;
use crate::domain::Domain;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// A forbidden domain ends here
    terminal: bool,
    /// Keyed by byte-reversed label
    children: HashMap<Vec<u8>, TrieNode>,
}

impl TrieNode {
    fn count_terminals(&self) -> usize {
        if self.terminal {
            // Descendants are dropped when a node becomes terminal
            return 1;
        }
        self.children.values().map(TrieNode::count_terminals).sum()
    }
}

/// Forbidden-domain trie.
///
/// Built once; insertion applies the same reduction as
/// [`super::reduce_forbidden`]: a domain under an existing terminal is
/// skipped, and a new terminal drops everything below it.
#[derive(Debug, Clone, Default)]
pub struct LabelTrie {
    root: TrieNode,
    len: usize,
}

impl LabelTrie {
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Domain>,
    {
        let mut root = TrieNode::default();
        let mut inserted = 0usize;

        for domain in domains {
            let domain = domain.into();
            if Self::insert(&mut root, &domain) {
                inserted += 1;
            }
        }

        let len = root.count_terminals();
        tracing::debug!(inserted, len, "built label trie");
        Self { root, len }
    }

    /// Returns false if `domain` was already covered.
    fn insert(root: &mut TrieNode, domain: &Domain) -> bool {
        let mut node = root;
        for label in domain.reversed_labels() {
            if node.terminal {
                return false;
            }
            node = node.children.entry(label.to_vec()).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        node.children.clear();
        true
    }

    /// True if `domain` equals or lies below a forbidden domain.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        let mut node = &self.root;
        for label in domain.reversed_labels() {
            match node.children.get(label) {
                Some(child) if child.terminal => return true,
                Some(child) => node = child,
                None => return false,
            }
        }
        false
    }

    /// Number of forbidden domains kept after reduction
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl DomainFilter for LabelTrie {
    fn is_forbidden(&self, domain: &Domain) -> bool {
        LabelTrie::is_forbidden(self, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(raw: &[&str]) -> LabelTrie {
        LabelTrie::new(raw.iter().copied())
    }

    #[test]
    fn test_empty_trie() {
        let trie = build(&[]);
        assert!(trie.is_empty());
        assert!(!trie.is_forbidden(&Domain::new("google.com")));
        assert!(!trie.is_forbidden(&Domain::new("")));
    }

    #[test]
    fn test_suffix_match() {
        let trie = build(&["google.com"]);

        assert!(trie.is_forbidden(&Domain::new("google.com")));
        assert!(trie.is_forbidden(&Domain::new("www.google.com")));
        assert!(trie.is_forbidden(&Domain::new("a.b.c.google.com")));
        assert!(!trie.is_forbidden(&Domain::new("notgoogle.com")));
        assert!(!trie.is_forbidden(&Domain::new("com")));
        assert!(!trie.is_forbidden(&Domain::new("google.com.evil")));
    }

    #[test]
    fn test_ancestor_absorbs_descendants() {
        // Descendant first, then ancestor
        let trie = build(&["mail.example.com", "a.b.example.com", "example.com"]);
        assert_eq!(trie.len(), 1);

        // Ancestor first, then descendant
        let trie = build(&["com", "evil.com", "good.com"]);
        assert_eq!(trie.len(), 1);
        assert!(trie.is_forbidden(&Domain::new("anything.com")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let trie = build(&["net", "net", "org"]);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_single_label() {
        let trie = build(&["net"]);
        assert!(trie.is_forbidden(&Domain::new("net")));
        assert!(trie.is_forbidden(&Domain::new("example.net")));
        assert!(!trie.is_forbidden(&Domain::new("network")));
    }

    #[test]
    fn test_empty_labels_match_textually() {
        // "a." ends with an empty label, so the empty name covers it
        let trie = build(&[""]);
        assert!(trie.is_forbidden(&Domain::new("")));
        assert!(trie.is_forbidden(&Domain::new("a.")));
        assert!(!trie.is_forbidden(&Domain::new("a")));
    }

    #[test]
    fn test_non_utf8_labels() {
        let trie = LabelTrie::new([Domain::new(b"caf\xe9.com")]);
        assert!(trie.is_forbidden(&Domain::new(b"www.caf\xe9.com")));
        assert!(!trie.is_forbidden(&Domain::new(b"caf\xe8.com")));
        assert!(!trie.is_forbidden(&Domain::new("com")));
    }
}

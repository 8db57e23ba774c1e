//! Reference list of known-good mail domains used for typo suggestions.
//!
//! The catalog is ordered: when several entries sit within the distance
//! threshold, the first one wins. Reads are shared; [`DomainCatalog::replace`]
//! is the single-writer configuration operation.

use std::sync::{PoisonError, RwLock};

use crate::distance::damerau_levenshtein;

/// Well known mail providers, scanned in order.
const WELL_KNOWN_DOMAINS: &[&str] = &[
    "web.de",
    "gmx.de",
    "gmx.com",
    "gmx.net",
    "freenet.net",
    "hotmail.com",
    "gmail.com",
    "googlemail.com",
    "live.de",
    "live.com",
    "hotmail.de",
    "aol.com",
    "t-online.de",
    "hushmail.com",
    "uni.de",
    "yahoo.com",
    "yahoo.de",
];

/// Ordered list of ASCII domain names serving as the suggestion reference set.
#[derive(Debug)]
pub struct DomainCatalog {
    domains: RwLock<Vec<String>>,
}

impl Default for DomainCatalog {
    fn default() -> Self {
        Self {
            domains: RwLock::new(WELL_KNOWN_DOMAINS.iter().map(|d| (*d).to_string()).collect()),
        }
    }
}

impl DomainCatalog {
    /// Catalog seeded with `domains`; falls back to the built-in provider
    /// list when the iterator yields nothing usable.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = sanitize(domains);
        if entries.is_empty() {
            Self::default()
        } else {
            Self {
                domains: RwLock::new(entries),
            }
        }
    }

    /// Replace the whole list. An empty replacement leaves the current
    /// entries active (no-op, not a clear).
    pub fn replace<I, S>(&self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = sanitize(domains);
        if entries.is_empty() {
            return;
        }
        let mut guard = self.domains.write().unwrap_or_else(PoisonError::into_inner);
        *guard = entries;
    }

    /// Append caller-supplied domains after the current entries, skipping
    /// duplicates.
    pub fn extend<I, S>(&self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = sanitize(domains);
        if entries.is_empty() {
            return;
        }
        let mut guard = self.domains.write().unwrap_or_else(PoisonError::into_inner);
        for entry in entries {
            if !guard.contains(&entry) {
                guard.push(entry);
            }
        }
    }

    /// Exact membership test (entries are stored lowercased).
    pub fn contains(&self, domain: &str) -> bool {
        let guard = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().any(|d| d == domain)
    }

    /// First entry within `max_distance` of `domain`, in catalog order.
    ///
    /// Entries are expected to be ASCII; a non-ASCII entry violates the
    /// distance contract and panics there.
    pub fn first_within(
        &self,
        domain: &str,
        max_distance: usize,
        alphabet_len: usize,
    ) -> Option<String> {
        let guard = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .iter()
            .find(|d| damerau_levenshtein(d, domain, alphabet_len) <= max_distance)
            .cloned()
    }

    pub fn len(&self) -> usize {
        let guard = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current entries, in order.
    pub fn snapshot(&self) -> Vec<String> {
        let guard = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }
}

fn sanitize<I, S>(domains: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    domains
        .into_iter()
        .map(|d| d.into().trim().to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

//! External domain facts consumed by the checker.
//!
//! The checker only depends on the [`DomainOracle`] contract. Real DNS stays
//! out of this crate: [`OfflineOracle`] answers "no" to everything, and
//! [`StaticOracle`] serves a caller-supplied allow-list. A resolver-backed
//! implementation can live downstream behind the same trait.

use std::collections::HashSet;

use thiserror::Error;

/// Transient lookup failure. The checker reports it as an `unknown`
/// classification instead of retrying.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle lookup timed out")]
    Timeout,
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

/// Answers the two domain-level questions the checker asks.
pub trait DomainOracle {
    /// Does `domain` advertise a mail-accepting record?
    fn has_mail_record(&self, domain: &str) -> Result<bool, OracleError>;

    /// Is `domain` registered at all?
    fn is_registered(&self, domain: &str) -> Result<bool, OracleError>;
}

/// Oracle for offline operation: every lookup answers "no" and never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineOracle;

impl DomainOracle for OfflineOracle {
    fn has_mail_record(&self, _domain: &str) -> Result<bool, OracleError> {
        Ok(false)
    }

    fn is_registered(&self, _domain: &str) -> Result<bool, OracleError> {
        Ok(false)
    }
}

/// Allow-list backed oracle: a domain with a mail record counts as
/// registered too.
#[derive(Debug, Default, Clone)]
pub struct StaticOracle {
    registered: HashSet<String>,
    mail_capable: HashSet<String>,
}

impl StaticOracle {
    pub fn new<I, S, J, T>(registered: I, mail_capable: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            registered: collect_domains(registered),
            mail_capable: collect_domains(mail_capable),
        }
    }
}

impl DomainOracle for StaticOracle {
    fn has_mail_record(&self, domain: &str) -> Result<bool, OracleError> {
        Ok(self.mail_capable.contains(domain))
    }

    fn is_registered(&self, domain: &str) -> Result<bool, OracleError> {
        Ok(self.registered.contains(domain) || self.mail_capable.contains(domain))
    }
}

fn collect_domains<I, S>(domains: I) -> HashSet<String>
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

//! Classification of a mail address: schema check, domain oracle, typo
//! suggestion against the catalog.
//!
//! The public entry point is [`check_address`], which runs the decision
//! procedure in strict order and returns exactly one [`AddressStatus`].
//! Errors never escape the call: oracle failures classify as
//! [`AddressStatus::Unknown`].

mod parse;
mod types;

pub use parse::{ParseError, ParsedAddress, parse_address};
pub use types::{AddressStatus, CheckOptions, SchemaHint, schema_hint};

use crate::catalog::DomainCatalog;
use crate::oracle::DomainOracle;

/// Check `address` with the default options (distance ≤ 2, ASCII alphabet,
/// catalog members trusted).
pub fn check_address<O>(address: &str, catalog: &DomainCatalog, oracle: &O) -> AddressStatus
where
    O: DomainOracle,
{
    check_address_with_options(address, catalog, oracle, &CheckOptions::default())
}

/// Check `address` and classify it, first matching branch wins:
/// schema error, trusted catalog member, oracle-confirmed mail domain,
/// typo suggestion, then registration status.
pub fn check_address_with_options<O>(
    address: &str,
    catalog: &DomainCatalog,
    oracle: &O,
    options: &CheckOptions,
) -> AddressStatus
where
    O: DomainOracle,
{
    let input = address.trim();
    if input.is_empty() {
        // nothing typed yet is not a schema error
        return AddressStatus::Unknown;
    }

    let parsed = match parse_address(input) {
        Ok(parsed) => parsed,
        Err(_) => return AddressStatus::WrongSchema,
    };

    if options.trust_catalog && catalog.contains(&parsed.domain) {
        return AddressStatus::Valid {
            address: input.to_string(),
        };
    }

    match oracle.has_mail_record(&parsed.domain) {
        Ok(true) => {
            return AddressStatus::Valid {
                address: input.to_string(),
            };
        }
        Ok(false) => {}
        Err(_) => return AddressStatus::Unknown,
    }

    // A domain kept raw after an IDNA refusal may hold characters outside
    // the alphabet bound; it can never match the ASCII catalog.
    if parsed.domain_fits_alphabet(options.alphabet_len) {
        if let Some(domain) =
            catalog.first_within(&parsed.domain, options.max_distance, options.alphabet_len)
        {
            #[cfg(feature = "with-tracing")]
            tracing::debug!("suggesting '{domain}' for '{}'", parsed.domain);
            return AddressStatus::TypoDetected {
                suggestion: format!("{}@{domain}", parsed.local),
            };
        }
    }

    match oracle.is_registered(&parsed.domain) {
        Ok(true) => AddressStatus::NoMxRecord,
        Ok(false) => AddressStatus::NotRegistered,
        Err(_) => AddressStatus::Unknown,
    }
}

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Local part and normalized domain of a structurally sound address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Everything before the `@`, kept verbatim.
    pub local: String,
    /// Domain after IDNA conversion to ASCII (lowercased raw domain when the
    /// conversion is refused).
    pub domain: String,
}

impl ParsedAddress {
    pub(crate) fn domain_fits_alphabet(&self, alphabet_len: usize) -> bool {
        self.domain.chars().all(|c| (c as usize) < alphabet_len)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("address must contain exactly one '@'")]
    AtCount,
    #[error("empty local part")]
    EmptyLocal,
    #[error("empty domain")]
    EmptyDomain,
}

/// Split `local@domain` and normalize the domain for lookups.
pub fn parse_address(address: &str) -> Result<ParsedAddress, ParseError> {
    let input = address.trim();
    let parts: Vec<&str> = input.split('@').collect();
    if parts.len() != 2 {
        #[cfg(feature = "with-tracing")]
        tracing::warn!("syntax error on '{input}'");
        return Err(ParseError::AtCount);
    }
    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return Err(ParseError::EmptyLocal);
    }
    if domain.is_empty() {
        return Err(ParseError::EmptyDomain);
    }
    Ok(ParsedAddress {
        local: local.to_string(),
        domain: normalize_domain(domain),
    })
}

/// IDNA conversion with non-fatal degradation: a refused conversion falls
/// back to the lowercased raw domain.
fn normalize_domain(raw: &str) -> String {
    match idna::domain_to_ascii(raw) {
        Ok(ascii) if !ascii.is_empty() => ascii,
        _ => {
            #[cfg(feature = "with-tracing")]
            tracing::warn!("IDNA conversion refused for '{raw}', using the raw domain");
            raw.to_lowercase()
        }
    }
}

use crate::distance::ASCII_ALPHABET;

/// Outcome of a mail address check.
///
/// The suggestion payload exists exactly for the two variants that carry an
/// address back to the caller.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressStatus {
    /// The address seems to be fine; carries the validated (trimmed) address.
    Valid { address: String },
    /// Schema error, like a missing at sign.
    WrongSchema,
    /// The domain is currently not registered.
    NotRegistered,
    /// The domain cannot receive mails (no mail-accepting record).
    NoMxRecord,
    /// A typographic error was detected; carries the corrected address.
    TypoDetected { suggestion: String },
    /// The status of the address could not be determined.
    Unknown,
    /// A check is in progress. Reserved for callers tracking an in-flight
    /// check; never produced by [`check_address`](crate::checker::check_address).
    Pending,
}

impl AddressStatus {
    /// The accepted or suggested address, when the status carries one.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Valid { address } => Some(address),
            Self::TypoDetected { suggestion } => Some(suggestion),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Stable wire name of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid { .. } => "valid",
            Self::WrongSchema => "wrongSchema",
            Self::NotRegistered => "notRegistered",
            Self::NoMxRecord => "noMxRecord",
            Self::TypoDetected { .. } => "typoDetected",
            Self::Unknown => "unknown",
            Self::Pending => "pending",
        }
    }
}

/// Tuning knobs for the classification.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Maximum edit distance for a catalog entry to count as a suggestion.
    pub max_distance: usize,
    /// Alphabet bound handed to the distance computation.
    pub alphabet_len: usize,
    /// Accept catalog members as valid without consulting the oracle.
    pub trust_catalog: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_distance: 2,
            alphabet_len: ASCII_ALPHABET,
            trust_catalog: true,
        }
    }
}

/// Presentation nuance for `wrongSchema`: an address missing `@` or `.`
/// reads as unfinished typing rather than a malformed one.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaHint {
    Incomplete,
    Malformed,
}

/// Sub-message hint for a `wrongSchema` classification. This never changes
/// the status itself; it only helps a UI pick its wording.
pub fn schema_hint(input: &str) -> SchemaHint {
    if !input.contains('@') || !input.contains('.') {
        SchemaHint::Incomplete
    } else {
        SchemaHint::Malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_present_for_valid_and_typo_only() {
        let valid = AddressStatus::Valid {
            address: "a@b.de".into(),
        };
        let typo = AddressStatus::TypoDetected {
            suggestion: "a@web.de".into(),
        };
        assert_eq!(valid.address(), Some("a@b.de"));
        assert_eq!(typo.address(), Some("a@web.de"));
        assert_eq!(AddressStatus::NoMxRecord.address(), None);
        assert_eq!(AddressStatus::Unknown.address(), None);
    }

    #[test]
    fn labels_use_the_wire_names() {
        assert_eq!(AddressStatus::WrongSchema.label(), "wrongSchema");
        assert_eq!(AddressStatus::NoMxRecord.label(), "noMxRecord");
        assert_eq!(AddressStatus::Pending.label(), "pending");
    }

    #[test]
    fn schema_hint_flags_unfinished_addresses() {
        assert_eq!(schema_hint("not-an-email"), SchemaHint::Incomplete);
        assert_eq!(schema_hint("user@host"), SchemaHint::Incomplete);
        assert_eq!(schema_hint("user@@example.com"), SchemaHint::Malformed);
    }

    #[test]
    fn default_options_match_the_historic_constants() {
        let options = CheckOptions::default();
        assert_eq!(options.max_distance, 2);
        assert_eq!(options.alphabet_len, 128);
        assert!(options.trust_catalog);
    }
}

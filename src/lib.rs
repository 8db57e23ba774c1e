#![forbid(unsafe_code)]
//! mailtypo_lib — classification d'adresses e-mail + suggestion de typos
//!
//! The checker parses an address, asks an injected [`DomainOracle`] about the
//! domain and, when the domain looks like a typo of a catalog entry, proposes
//! a corrected address based on the Damerau-Levenshtein distance.

pub mod catalog;
pub mod checker;
pub mod distance;
pub mod oracle;

pub use catalog::DomainCatalog;
pub use checker::{
    AddressStatus,
    CheckOptions,
    ParseError,
    ParsedAddress,
    SchemaHint,
    check_address,
    check_address_with_options,
    parse_address,
    schema_hint,
};
pub use distance::{ASCII_ALPHABET, damerau_levenshtein};
pub use oracle::{DomainOracle, OfflineOracle, OracleError, StaticOracle};

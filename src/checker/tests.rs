use super::{AddressStatus, CheckOptions, check_address, check_address_with_options};
use crate::catalog::DomainCatalog;
use crate::oracle::{DomainOracle, OracleError};

type OracleResult = Result<bool, OracleError>;
type OracleFn = dyn Fn(&str) -> OracleResult;

struct StubOracle {
    on_mail: Box<OracleFn>,
    on_registered: Box<OracleFn>,
}

impl StubOracle {
    fn new<M, R>(on_mail: M, on_registered: R) -> Self
    where
        M: Fn(&str) -> OracleResult + 'static,
        R: Fn(&str) -> OracleResult + 'static,
    {
        Self {
            on_mail: Box::new(on_mail),
            on_registered: Box::new(on_registered),
        }
    }

    fn offline() -> Self {
        Self::new(|_| Ok(false), |_| Ok(false))
    }
}

impl DomainOracle for StubOracle {
    fn has_mail_record(&self, domain: &str) -> OracleResult {
        (self.on_mail)(domain)
    }

    fn is_registered(&self, domain: &str) -> OracleResult {
        (self.on_registered)(domain)
    }
}

#[test]
fn typo_suggests_the_first_catalog_match() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let status = check_address("x@gnail.com", &catalog, &StubOracle::offline());
    assert_eq!(
        status,
        AddressStatus::TypoDetected {
            suggestion: "x@gmail.com".to_string()
        }
    );
}

#[test]
fn suggestion_keeps_the_local_part() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let status = check_address("jane.doe+tag@gmial.com", &catalog, &StubOracle::offline());
    assert_eq!(status.address(), Some("jane.doe+tag@gmail.com"));
}

#[test]
fn missing_at_sign_is_a_schema_error_regardless_of_oracle() {
    let catalog = DomainCatalog::default();
    let oracle = StubOracle::new(|_| Ok(true), |_| Ok(true));
    let status = check_address("not-an-email", &catalog, &oracle);
    assert_eq!(status, AddressStatus::WrongSchema);
}

#[test]
fn unmatched_unregistered_domain_is_not_registered() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let status = check_address("x@unknowndomain.invalid", &catalog, &StubOracle::offline());
    assert_eq!(status, AddressStatus::NotRegistered);
}

#[test]
fn registered_domain_without_mail_record_is_no_mx() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let oracle = StubOracle::new(|_| Ok(false), |_| Ok(true));
    let status = check_address("x@unknowndomain.invalid", &catalog, &oracle);
    assert_eq!(status, AddressStatus::NoMxRecord);
}

#[test]
fn mail_record_wins_and_echoes_the_trimmed_address() {
    let catalog = DomainCatalog::default();
    let oracle = StubOracle::new(|_| Ok(true), |_| Ok(true));
    let status = check_address("  x@example.com ", &catalog, &oracle);
    assert_eq!(
        status,
        AddressStatus::Valid {
            address: "x@example.com".to_string()
        }
    );
    assert!(status.is_valid());
}

#[test]
fn oracle_failure_classifies_as_unknown() {
    let catalog = DomainCatalog::default();
    let oracle = StubOracle::new(|_| Err(OracleError::Timeout), |_| Ok(true));
    let status = check_address("x@example.com", &catalog, &oracle);
    assert_eq!(status, AddressStatus::Unknown);
}

#[test]
fn registration_failure_classifies_as_unknown() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let oracle = StubOracle::new(
        |_| Ok(false),
        |_| Err(OracleError::Unavailable("resolver down".into())),
    );
    let status = check_address("x@unknowndomain.invalid", &catalog, &oracle);
    assert_eq!(status, AddressStatus::Unknown);
}

#[test]
fn blank_input_is_unknown_not_a_schema_error() {
    let catalog = DomainCatalog::default();
    assert_eq!(
        check_address("   ", &catalog, &StubOracle::offline()),
        AddressStatus::Unknown
    );
}

#[test]
fn catalog_member_skips_the_oracle() {
    let catalog = DomainCatalog::new(["example.org"]);
    // an oracle that always fails proves the fast path never consults it
    let oracle = StubOracle::new(
        |_| Err(OracleError::Timeout),
        |_| Err(OracleError::Timeout),
    );
    let status = check_address("a@example.org", &catalog, &oracle);
    assert_eq!(
        status,
        AddressStatus::Valid {
            address: "a@example.org".to_string()
        }
    );
}

#[test]
fn untrusted_catalog_member_still_matches_at_distance_zero() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let options = CheckOptions {
        trust_catalog: false,
        ..CheckOptions::default()
    };
    let status =
        check_address_with_options("a@gmail.com", &catalog, &StubOracle::offline(), &options);
    assert_eq!(
        status,
        AddressStatus::TypoDetected {
            suggestion: "a@gmail.com".to_string()
        }
    );
}

#[test]
fn max_distance_zero_disables_suggestions() {
    let catalog = DomainCatalog::new(["gmail.com"]);
    let options = CheckOptions {
        max_distance: 0,
        trust_catalog: false,
        ..CheckOptions::default()
    };
    let status =
        check_address_with_options("a@gmail.co", &catalog, &StubOracle::offline(), &options);
    assert_eq!(status, AddressStatus::NotRegistered);
}

#[test]
fn idn_domain_is_compared_in_ascii_form() {
    let catalog = DomainCatalog::new(["xn--exmple-cua.com"]);
    let status = check_address("user@exämple.com", &catalog, &StubOracle::offline());
    assert!(status.is_valid());
}

#[test]
fn unconvertible_domain_skips_the_catalog_scan() {
    // U+FFFD never converts to ASCII; the scan must not panic and the
    // classification falls through to the registration question.
    let catalog = DomainCatalog::default();
    let status = check_address("x@bad\u{fffd}domain.de", &catalog, &StubOracle::offline());
    assert_eq!(status, AddressStatus::NotRegistered);
}

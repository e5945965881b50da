use intake_core::models::address::{
    compose_address, format_full_address, validate_postal_code, AddressParts, HouseNumberLookup,
};
use intake_core::reference;

#[test]
fn missing_addition_leaves_no_dangling_comma() {
    let parts = AddressParts {
        street: Some("Main St"),
        house_number: Some("5"),
        house_number_addition: None,
        postal_code: Some("12345"),
    };
    assert_eq!(compose_address(&parts), "Main St, 5, 12345");
}

#[test]
fn empty_strings_are_omitted_like_missing_values() {
    let parts = AddressParts {
        street: Some(""),
        house_number: Some("10"),
        house_number_addition: Some("B"),
        postal_code: Some(""),
    };
    assert_eq!(compose_address(&parts), "10, B");
}

#[test]
fn all_parts_keep_fixed_order() {
    let parts = AddressParts {
        street: Some("Oak Avenue"),
        house_number: Some("100"),
        house_number_addition: Some("C"),
        postal_code: Some("67890"),
    };
    assert_eq!(compose_address(&parts), "Oak Avenue, 100, C, 67890");
}

#[test]
fn nothing_composes_to_empty_string() {
    assert_eq!(compose_address(&AddressParts::default()), "");
}

#[test]
fn full_address_matches_lookup_format() {
    let lookup = reference::postal_code("12345").unwrap();
    assert_eq!(
        format_full_address("1", Some("A"), lookup),
        "1A Main Street, Springfield, IL 12345"
    );
    assert_eq!(
        format_full_address("3", None, lookup),
        "3 Main Street, Springfield, IL 12345"
    );
}

#[test]
fn unknown_lookup_echoes_postal_code() {
    let lookup = HouseNumberLookup::unknown("99999");
    assert_eq!(lookup.postal_code, "99999");
    assert!(lookup.street.is_empty());
    assert!(lookup.house_numbers.is_empty());
}

#[test]
fn postal_code_must_be_five_digits() {
    assert!(validate_postal_code("12345").is_valid);
    assert!(validate_postal_code("12345").message.is_none());

    for bad in ["1234", "123456", "12a45", "", "１２３４５"] {
        let result = validate_postal_code(bad);
        assert!(!result.is_valid, "{bad} should be rejected");
        assert_eq!(result.message.as_deref(), Some("Postal code must be 5 digits"));
    }
}

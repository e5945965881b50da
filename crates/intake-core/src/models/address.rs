use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Street-level data known for a postal code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HouseNumberLookup {
    pub street: String,
    pub city: String,
    pub municipality: String,
    pub postal_code: String,
    pub province: String,
    pub house_numbers: Vec<u32>,
}

impl HouseNumberLookup {
    /// The empty answer for a postal code nothing is known about.
    pub fn unknown(postal_code: &str) -> Self {
        Self {
            postal_code: postal_code.to_string(),
            ..Self::default()
        }
    }
}

/// A concrete addressable unit (house number plus optional addition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddressUid {
    pub address_id: u32,
    pub house_number: u32,
    pub house_number_add: Option<String>,
    pub full_address: String,
}

/// The address state the form accumulates while the clinician walks
/// through postal code, house number and addition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddressOptions {
    pub street: Option<String>,
    pub city: Option<String>,
    pub house_number: Option<String>,
    #[serde(default)]
    pub house_numbers: Vec<String>,
    pub house_number_addition: Option<String>,
    #[serde(default)]
    pub house_number_additions: Vec<String>,
    pub address: Option<String>,
}

/// Inputs to [`compose_address`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressParts<'a> {
    pub street: Option<&'a str>,
    pub house_number: Option<&'a str>,
    pub house_number_addition: Option<&'a str>,
    pub postal_code: Option<&'a str>,
}

/// Join the present, non-empty parts with `", "` in the order street,
/// house number, addition, postal code.
pub fn compose_address(parts: &AddressParts<'_>) -> String {
    [
        parts.street,
        parts.house_number,
        parts.house_number_addition,
        parts.postal_code,
    ]
    .into_iter()
    .flatten()
    .filter(|value| !value.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// `"<number><addition> <street>, <city>, <province> <postal>"`.
pub fn format_full_address(
    house_number: &str,
    addition: Option<&str>,
    lookup: &HouseNumberLookup,
) -> String {
    format!(
        "{house_number}{} {}, {}, {} {}",
        addition.unwrap_or(""),
        lookup.street,
        lookup.city,
        lookup.province,
        lookup.postal_code,
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostalCodeValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Postal codes are exactly five ASCII digits.
pub fn validate_postal_code(postal_code: &str) -> PostalCodeValidation {
    let is_valid = postal_code.len() == 5 && postal_code.bytes().all(|b| b.is_ascii_digit());
    PostalCodeValidation {
        is_valid,
        message: (!is_valid).then(|| "Postal code must be 5 digits".to_string()),
    }
}

use intake_core::models::address::{format_full_address, AddressUid, HouseNumberLookup};
use intake_core::reference;

use crate::BoxFuture;
use crate::error::ServiceError;

/// Most addresses [`AddressDirectory::search`] returns.
pub const SEARCH_LIMIT: usize = 10;

/// Address lookup backing the postal code / house number / addition flow.
pub trait AddressDirectory: Send + Sync {
    /// Street data for a postal code. Unknown codes yield an empty lookup
    /// that echoes the code back, not an error.
    fn house_numbers(&self, postal_code: &str) -> BoxFuture<'_, Result<HouseNumberLookup, ServiceError>>;

    /// Addressable units (one per addition) at a house number.
    fn address_uids(
        &self,
        postal_code: &str,
        house_number: &str,
    ) -> BoxFuture<'_, Result<Vec<AddressUid>, ServiceError>>;

    /// Formatted full address; empty when the postal code is unknown.
    fn full_address(
        &self,
        postal_code: &str,
        house_number: &str,
        addition: Option<&str>,
    ) -> BoxFuture<'_, Result<String, ServiceError>>;

    /// Case-insensitive substring search over every known address.
    fn search(&self, term: &str) -> BoxFuture<'_, Result<Vec<String>, ServiceError>>;
}

/// Directory over the static reference tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAddressDirectory;

impl StaticAddressDirectory {
    fn lookup(postal_code: &str) -> Option<&'static HouseNumberLookup> {
        reference::postal_code(postal_code)
    }

    fn uids(postal_code: &str, house_number: &str) -> Result<Vec<AddressUid>, ServiceError> {
        let Some(lookup) = Self::lookup(postal_code) else {
            return Ok(Vec::new());
        };
        let additions = reference::house_number_additions(house_number);
        if additions.is_empty() {
            return Ok(Vec::new());
        }

        let number: u32 = house_number
            .parse()
            .map_err(|_| ServiceError::InvalidHouseNumber(house_number.to_string()))?;

        Ok(additions
            .iter()
            .enumerate()
            .map(|(index, addition)| AddressUid {
                address_id: number * 100 + index as u32,
                house_number: number,
                house_number_add: Some(addition.to_string()),
                full_address: format_full_address(house_number, Some(addition), lookup),
            })
            .collect())
    }

    fn all_addresses() -> Vec<String> {
        let mut addresses = Vec::new();
        for lookup in reference::postal_codes() {
            for number in &lookup.house_numbers {
                let number = number.to_string();
                addresses.push(format_full_address(&number, None, lookup));
                for addition in reference::house_number_additions(&number) {
                    addresses.push(format_full_address(&number, Some(addition), lookup));
                }
            }
        }
        addresses
    }
}

impl AddressDirectory for StaticAddressDirectory {
    fn house_numbers(&self, postal_code: &str) -> BoxFuture<'_, Result<HouseNumberLookup, ServiceError>> {
        let lookup = Self::lookup(postal_code)
            .cloned()
            .unwrap_or_else(|| HouseNumberLookup::unknown(postal_code));
        Box::pin(async move { Ok(lookup) })
    }

    fn address_uids(
        &self,
        postal_code: &str,
        house_number: &str,
    ) -> BoxFuture<'_, Result<Vec<AddressUid>, ServiceError>> {
        let result = Self::uids(postal_code, house_number);
        Box::pin(async move { result })
    }

    fn full_address(
        &self,
        postal_code: &str,
        house_number: &str,
        addition: Option<&str>,
    ) -> BoxFuture<'_, Result<String, ServiceError>> {
        let address = Self::lookup(postal_code)
            .map(|lookup| format_full_address(house_number, addition, lookup))
            .unwrap_or_default();
        Box::pin(async move { Ok(address) })
    }

    fn search(&self, term: &str) -> BoxFuture<'_, Result<Vec<String>, ServiceError>> {
        let term = term.to_lowercase();
        let matches: Vec<String> = Self::all_addresses()
            .into_iter()
            .filter(|address| address.to_lowercase().contains(&term))
            .take(SEARCH_LIMIT)
            .collect();
        Box::pin(async move { Ok(matches) })
    }
}

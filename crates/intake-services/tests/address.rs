use intake_services::address::{AddressDirectory, StaticAddressDirectory, SEARCH_LIMIT};

#[tokio::test]
async fn known_postal_code_returns_street_and_numbers() {
    let lookup = StaticAddressDirectory.house_numbers("67890").await.unwrap();
    assert_eq!(lookup.street, "Oak Avenue");
    assert_eq!(lookup.city, "Madison");
    assert_eq!(lookup.house_numbers, [100, 102, 104, 106, 108, 110]);
}

#[tokio::test]
async fn unknown_postal_code_returns_empty_lookup() {
    let lookup = StaticAddressDirectory.house_numbers("00000").await.unwrap();
    assert_eq!(lookup.postal_code, "00000");
    assert!(lookup.street.is_empty());
    assert!(lookup.house_numbers.is_empty());
}

#[tokio::test]
async fn address_uids_enumerate_additions() {
    let uids = StaticAddressDirectory.address_uids("67890", "100").await.unwrap();
    let additions: Vec<_> = uids
        .iter()
        .map(|u| u.house_number_add.as_deref().unwrap())
        .collect();
    assert_eq!(additions, ["A", "B", "C"]);
    assert_eq!(uids[0].address_id, 10000);
    assert_eq!(uids[2].address_id, 10002);
    assert_eq!(uids[1].full_address, "100B Oak Avenue, Madison, WI 67890");
}

#[tokio::test]
async fn address_uids_empty_for_unknown_postal_code_or_plain_number() {
    assert!(StaticAddressDirectory.address_uids("00000", "1").await.unwrap().is_empty());
    assert!(StaticAddressDirectory.address_uids("12345", "3").await.unwrap().is_empty());
}

#[tokio::test]
async fn full_address_formats_or_is_empty() {
    let address = StaticAddressDirectory
        .full_address("54321", "27", Some("B"))
        .await
        .unwrap();
    assert_eq!(address, "27B Pine Road, Franklin, TN 54321");

    let unknown = StaticAddressDirectory.full_address("00000", "1", None).await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive_and_capped() {
    let results = StaticAddressDirectory.search("main street").await.unwrap();
    assert_eq!(results.len(), SEARCH_LIMIT);
    assert_eq!(results[0], "1 Main Street, Springfield, IL 12345");
    assert_eq!(results[1], "1A Main Street, Springfield, IL 12345");

    let pine = StaticAddressDirectory.search("PINE").await.unwrap();
    assert!(pine.iter().all(|a| a.contains("Pine Road")));
    assert!(pine.contains(&"25A Pine Road, Franklin, TN 54321".to_string()));
}

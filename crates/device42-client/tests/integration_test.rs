//! Integration tests for the Device42 client
//!
//! These tests require a running Device42 appliance.
//! Set D42_URL, D42_USERNAME and D42_PASSWORD environment variables to run.

use device42_client::{BuildingParams, Device42Client, RackQuery};

fn live_client() -> Device42Client {
    let url = std::env::var("D42_URL").unwrap_or_else(|_| "https://localhost".to_string());
    let username = std::env::var("D42_USERNAME")
        .expect("D42_USERNAME environment variable must be set");
    let password = std::env::var("D42_PASSWORD")
        .expect("D42_PASSWORD environment variable must be set");

    Device42Client::new_insecure(url, username, password).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running Device42 instance
async fn test_client_creation() {
    let client = live_client();

    // Test basic API connectivity
    client
        .validate_credentials()
        .await
        .expect("Failed to validate credentials");
}

#[tokio::test]
#[ignore]
async fn test_list_buildings() {
    let client = live_client();

    let buildings = client
        .list_buildings(true)
        .await
        .expect("Failed to list buildings");

    println!("Found {} buildings", buildings.len());
}

#[tokio::test]
#[ignore]
async fn test_create_and_find_building() {
    let client = live_client();

    let params = BuildingParams {
        name: "device42-client test building".to_string(),
        notes: Some("created by integration tests".to_string()),
        ..BuildingParams::default()
    };

    let rsp = client
        .create_building(&params)
        .await
        .expect("Failed to create building");
    println!("Created building id: {:?}", rsp.result_id());

    let found = client
        .get_building_by_name("device42-client test building", true)
        .await
        .expect("Failed to look up building");
    assert!(found.is_some(), "Created building should be listed");
}

#[tokio::test]
#[ignore]
async fn test_rack_occupancy() {
    let client = live_client();

    let racks = client
        .find_racks(&RackQuery::default(), true)
        .await
        .expect("Failed to list racks");
    println!("Found {} racks", racks.len());

    if let Some(rack) = racks.first().and_then(|r| r.rack_id) {
        let detail = client.get_rack(rack).await.expect("Failed to fetch rack");
        for device in detail.devices_in_order() {
            println!("device: {:?} at {:?}", device.name, device.start_at);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_list_service_levels() {
    let client = live_client();

    let levels = client
        .list_service_levels(true)
        .await
        .expect("Failed to list service levels");

    for level in levels {
        println!("{level}");
    }
}

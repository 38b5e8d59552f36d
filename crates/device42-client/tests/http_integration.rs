//! Integration tests for the Device42 HTTP client using wiremock
//!
//! These tests verify the client behavior against mocked endpoints:
//! Basic auth, form-encoded write bodies, the message envelope, collection
//! unwrapping and error mapping.

use device42_client::{
    BuildingParams, CustomFieldParams, CustomFieldTarget, Device42Client, Device42Error,
    IpAddressParams, RackQuery,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// admin:changeme
const BASIC_AUTH: &str = "Basic YWRtaW46Y2hhbmdlbWU=";

fn client(server: &MockServer) -> Device42Client {
    Device42Client::new(server.uri(), "admin", "changeme").expect("Failed to create client")
}

#[tokio::test]
async fn create_building_posts_form_and_parses_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1.0/buildings/"))
        .and(header("Authorization", BASIC_AUTH))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("name=Test+Building"))
        .and(body_string_contains("address=somewhere+in+the+city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": ["Building added/updated successfully", 3, "Test Building", true, true],
            "code": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = BuildingParams {
        name: "Test Building".to_string(),
        address: Some("somewhere in the city".to_string()),
        ..BuildingParams::default()
    };
    let rsp = client(&server)
        .create_building(&params)
        .await
        .expect("create_building should succeed");

    assert!(rsp.ok());
    assert!(rsp.applied());
    assert_eq!(rsp.result_id(), Some(3));
    assert_eq!(rsp.label(), Some("Test Building"));
}

#[tokio::test]
async fn racks_are_cached_and_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/racks/"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "racks": [
                {
                    "rack_id": 80,
                    "name": "TestRack1",
                    "size": 42,
                    "room": "Test Room",
                    "building": "TestBuilding",
                    "numbering_start_from_bottom": "yes",
                    "devices": [
                        {"device_id": 1, "name": "low", "start_at": 6.0},
                        {"device_id": 2, "name": "high", "start_at": 36.0}
                    ]
                },
                {
                    "rack_id": 81,
                    "name": "TestRack2",
                    "size": 42,
                    "room": "Lab",
                    "building": "TestBuilding"
                }
            ]
        })))
        // The cache must keep the second lookup off the network
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let all = client.list_racks(false).await.expect("list_racks");
    assert_eq!(all.len(), 2);

    let in_room = client
        .find_racks(&RackQuery { room: Some("Test Room".to_string()), ..RackQuery::default() }, false)
        .await
        .expect("find_racks");
    assert_eq!(in_room.len(), 1);
    assert_eq!(in_room[0].name, "TestRack1");

    // Bottom-up numbering iterates top of rack first
    let names: Vec<&str> = in_room[0]
        .devices_in_order()
        .iter()
        .filter_map(|d| d.name.as_deref())
        .collect();
    assert_eq!(names, vec!["high", "low"]);
}

#[tokio::test]
async fn device_fetch_follows_nested_objects() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/devices/id/156/"))
        .and(query_param("follow", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_id": 156,
            "name": "TestDevice",
            "serial_no": "Ab123asd",
            "hw_model": "Generic Hardware 1U",
            "in_service": true,
            "ip_addresses": [
                {"ip": "1.1.1.1", "type": "static", "macaddress": "00:00:00:00:00:02"}
            ],
            "mac_addresses": [null, {"mac": "00:00:00:00:00:02"}]
        })))
        .mount(&server)
        .await;

    let device = client(&server).get_device(156).await.expect("get_device");

    assert_eq!(device.name, "TestDevice");
    assert_eq!(device.hardware.as_deref(), Some("Generic Hardware 1U"));
    assert_eq!(device.ip_addresses.len(), 1);
    assert_eq!(device.ip_addresses[0].ipaddress, "1.1.1.1");
    // The null entry is dropped
    assert_eq!(device.mac_addresses.len(), 1);
}

#[tokio::test]
async fn missing_device_maps_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/devices/name/unknown/"))
        .and(query_param("follow", "yes"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "msg": "Device not found",
            "code": 1
        })))
        .mount(&server)
        .await;

    let found = client(&server)
        .get_device_by_name("unknown")
        .await
        .expect("404 should map to None");
    assert!(found.is_none());
}

#[tokio::test]
async fn bad_credentials_surface_as_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/service_level/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid username/password."
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .validate_credentials()
        .await
        .expect_err("401 should be an error");
    assert!(matches!(err, Device42Error::Authentication(_)));
}

#[tokio::test]
async fn ip_registration_uses_unversioned_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ip/"))
        .and(body_string_contains("ipaddress=1.1.1.1"))
        .and(body_string_contains("type=static"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": ["ip added or updated", 1, "1.1.1.1", true, true],
            "code": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = IpAddressParams {
        ipaddress: "1.1.1.1".to_string(),
        kind: Some("static".to_string()),
        ..IpAddressParams::default()
    };
    let rsp = client(&server)
        .create_ip_address(&params)
        .await
        .expect("create_ip_address");
    assert_eq!(rsp.result_id(), Some(1));
}

#[tokio::test]
async fn custom_field_put_uses_target_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/1.0/custom_fields/building/"))
        .and(body_string_contains("key=created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": ["custom key pair values added or updated", 1, "Building with CustomFields"],
            "code": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = CustomFieldParams {
        name: "Building with CustomFields".to_string(),
        key: "created".to_string(),
        kind: Some("date".to_string()),
        value: Some("2014-04-02".to_string()),
        ..CustomFieldParams::default()
    };
    let rsp = client(&server)
        .put_custom_field(CustomFieldTarget::Building, &params)
        .await
        .expect("put_custom_field");
    assert!(rsp.ok());
    assert!(rsp.applied());
    assert_eq!(rsp.result_id(), Some(1));
}

#[tokio::test]
async fn mac_lookup_fills_cache_from_keyed_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/macs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "macaddresses": [
                {"macaddress_id": 3, "macaddress": "11:11:11:11:22:01", "port_name": "eth0"},
                {"macaddress_id": 4, "macaddress": "11:11:11:11:22:02"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mac = client
        .get_mac_by_address("11:11:11:11:22:01", false)
        .await
        .expect("get_mac_by_address")
        .expect("address should be cached");
    assert_eq!(mac.macaddress_id, Some(3));

    // Second lookup comes from the cache
    let missing = client
        .get_mac_by_address("ff:ff:ff:ff:ff:ff", false)
        .await
        .expect("get_mac_by_address");
    assert!(missing.is_none());
}

#[tokio::test]
async fn malformed_collection_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/buildings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "unexpected": []
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_buildings(false)
        .await
        .expect_err("missing collection key should error");
    assert!(matches!(err, Device42Error::Api(_)));
}

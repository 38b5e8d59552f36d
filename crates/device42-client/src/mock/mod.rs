//! Mock Device42Client for unit testing
//!
//! This module provides a mock implementation of Device42ClientTrait that can
//! be used in unit tests without requiring a running Device42 appliance.
//!
//! The mock is organized into domain-specific modules:
//! - `facilities.rs` - buildings, rooms, racks and rack mounts
//! - `inventory.rs` - devices, hardware, assets, PDUs, patch panels
//! - `ipam.rs` - MAC/IP addresses, subnets, VLANs, switch ports, DNS
//! - `commercial.rs` - customers and service levels
//! - `extras.rs` - custom fields and history

mod commercial;
mod extras;
mod facilities;
mod inventory;
mod ipam;

use crate::device42_trait::Device42ClientTrait;
use crate::error::Device42Error;
use crate::models::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock Device42Client for testing
///
/// Stores resources in memory, keyed the way the real API keys them, and
/// answers writes with envelopes shaped exactly like the upstream ones so
/// envelope-parsing code paths are exercised.
#[derive(Debug, Clone)]
pub struct MockDevice42Client {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) buildings: Arc<Mutex<HashMap<String, Building>>>,
    pub(crate) rooms: Arc<Mutex<HashMap<u64, Room>>>,
    pub(crate) racks: Arc<Mutex<HashMap<u64, Rack>>>,
    pub(crate) devices: Arc<Mutex<HashMap<u64, Device>>>,
    pub(crate) assets: Arc<Mutex<HashMap<u64, Asset>>>,
    pub(crate) hardware_models: Arc<Mutex<HashMap<String, HardwareParams>>>,
    pub(crate) pdus: Arc<Mutex<HashMap<String, PduParams>>>,
    pub(crate) pdu_models: Arc<Mutex<Vec<PduModel>>>,
    pub(crate) patch_panel_models: Arc<Mutex<Vec<PatchPanelModel>>>,
    pub(crate) patch_panel_ports: Arc<Mutex<HashMap<(u64, u32), PatchPanelPortParams>>>,
    pub(crate) mac_addresses: Arc<Mutex<HashMap<String, MacAddress>>>,
    pub(crate) ip_addresses: Arc<Mutex<HashMap<String, IpAddress>>>,
    pub(crate) subnets: Arc<Mutex<HashMap<String, SubnetParams>>>,
    pub(crate) vlans: Arc<Mutex<HashMap<u16, VlanParams>>>,
    pub(crate) switchports: Arc<Mutex<HashMap<u64, SwitchportParams>>>,
    pub(crate) dns_records: Arc<Mutex<Vec<DnsRecordParams>>>,
    pub(crate) customers: Arc<Mutex<HashMap<String, Customer>>>,
    pub(crate) service_levels: Arc<Mutex<HashMap<String, ServiceLevel>>>,
    pub(crate) custom_fields: Arc<Mutex<Vec<(CustomFieldTarget, CustomFieldParams)>>>,
    pub(crate) history: Arc<Mutex<Vec<HistoryEntry>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockDevice42Client {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            buildings: Arc::new(Mutex::new(HashMap::new())),
            rooms: Arc::new(Mutex::new(HashMap::new())),
            racks: Arc::new(Mutex::new(HashMap::new())),
            devices: Arc::new(Mutex::new(HashMap::new())),
            assets: Arc::new(Mutex::new(HashMap::new())),
            hardware_models: Arc::new(Mutex::new(HashMap::new())),
            pdus: Arc::new(Mutex::new(HashMap::new())),
            pdu_models: Arc::new(Mutex::new(Vec::new())),
            patch_panel_models: Arc::new(Mutex::new(Vec::new())),
            patch_panel_ports: Arc::new(Mutex::new(HashMap::new())),
            mac_addresses: Arc::new(Mutex::new(HashMap::new())),
            ip_addresses: Arc::new(Mutex::new(HashMap::new())),
            subnets: Arc::new(Mutex::new(HashMap::new())),
            vlans: Arc::new(Mutex::new(HashMap::new())),
            switchports: Arc::new(Mutex::new(HashMap::new())),
            dns_records: Arc::new(Mutex::new(Vec::new())),
            customers: Arc::new(Mutex::new(HashMap::new())),
            service_levels: Arc::new(Mutex::new(HashMap::new())),
            custom_fields: Arc::new(Mutex::new(Vec::new())),
            history: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add a building to the mock store (for test setup)
    pub fn add_building(&self, building: Building) {
        self.buildings.lock().unwrap().insert(building.name.clone(), building);
    }

    /// Add a room to the mock store (for test setup)
    pub fn add_room(&self, room: Room) {
        let id = room.room_id.unwrap_or_else(|| self.next_id());
        self.rooms.lock().unwrap().insert(id, room);
    }

    /// Add a rack to the mock store (for test setup)
    pub fn add_rack(&self, rack: Rack) {
        let id = rack.rack_id.unwrap_or_else(|| self.next_id());
        self.racks.lock().unwrap().insert(id, rack);
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        let id = device.device_id.unwrap_or_else(|| self.next_id());
        self.devices.lock().unwrap().insert(id, device);
    }

    /// Add an asset to the mock store (for test setup)
    pub fn add_asset(&self, asset: Asset) {
        let id = asset.asset_id.unwrap_or_else(|| self.next_id());
        self.assets.lock().unwrap().insert(id, asset);
    }

    /// Add a MAC address to the mock store (for test setup)
    pub fn add_mac_address(&self, mac: MacAddress) {
        self.mac_addresses.lock().unwrap().insert(mac.macaddress.clone(), mac);
    }

    /// Add a customer to the mock store (for test setup)
    pub fn add_customer(&self, customer: Customer) {
        self.customers.lock().unwrap().insert(customer.name.clone(), customer);
    }

    /// Add a service level to the mock store (for test setup)
    pub fn add_service_level(&self, level: ServiceLevel) {
        self.service_levels.lock().unwrap().insert(level.name.clone(), level);
    }

    /// Add a PDU model to the mock store (for test setup)
    pub fn add_pdu_model(&self, model: PduModel) {
        self.pdu_models.lock().unwrap().push(model);
    }

    /// Add a patch panel model to the mock store (for test setup)
    pub fn add_patch_panel_model(&self, model: PatchPanelModel) {
        self.patch_panel_models.lock().unwrap().push(model);
    }

    /// Add a history entry to the mock store (for test setup)
    pub fn add_history_entry(&self, entry: HistoryEntry) {
        self.history.lock().unwrap().push(entry);
    }

    /// Custom fields written so far (for assertions)
    pub fn custom_fields_written(&self) -> Vec<(CustomFieldTarget, CustomFieldParams)> {
        self.custom_fields.lock().unwrap().clone()
    }

    /// DNS records written so far (for assertions)
    pub fn dns_records_written(&self) -> Vec<DnsRecordParams> {
        self.dns_records.lock().unwrap().clone()
    }

    pub(crate) fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let value = *id;
        *id += 1;
        value
    }
}

/// Upstream-shaped five-element envelope with the trailing flag pair
pub(crate) fn envelope(text: &str, id: u64, label: impl Into<String>) -> ApiMessage {
    ApiMessage {
        code: 0,
        msg: serde_json::json!([text, id, label.into(), true, true]),
    }
}

/// Upstream-shaped three-element envelope (custom fields, assets, DNS, ...)
pub(crate) fn envelope_short(text: &str, id: u64, label: impl Into<String>) -> ApiMessage {
    ApiMessage {
        code: 0,
        msg: serde_json::json!([text, id, label.into()]),
    }
}

#[async_trait::async_trait]
impl Device42ClientTrait for MockDevice42Client {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_credentials(&self) -> Result<(), Device42Error> {
        Ok(())
    }

    async fn preload(&self) -> Result<(), Device42Error> {
        Ok(())
    }

    // Facilities Operations
    async fn create_building(&self, params: &BuildingParams) -> Result<ApiMessage, Device42Error> {
        facilities::create_building(self, params).await
    }
    async fn list_buildings(&self, reload: bool) -> Result<Vec<Building>, Device42Error> {
        facilities::list_buildings(self, reload).await
    }
    async fn get_building_by_name(&self, name: &str, reload: bool) -> Result<Option<Building>, Device42Error> {
        facilities::get_building_by_name(self, name, reload).await
    }
    async fn create_room(&self, params: &RoomParams) -> Result<ApiMessage, Device42Error> {
        facilities::create_room(self, params).await
    }
    async fn list_rooms(&self, reload: bool) -> Result<Vec<Room>, Device42Error> {
        facilities::list_rooms(self, reload).await
    }
    async fn get_room_by_name(&self, name: &str, reload: bool) -> Result<Option<Room>, Device42Error> {
        facilities::get_room_by_name(self, name, reload).await
    }
    async fn get_room(&self, id: u64) -> Result<Room, Device42Error> {
        facilities::get_room(self, id).await
    }
    async fn create_rack(&self, params: &RackParams) -> Result<ApiMessage, Device42Error> {
        facilities::create_rack(self, params).await
    }
    async fn list_racks(&self, reload: bool) -> Result<Vec<Rack>, Device42Error> {
        facilities::list_racks(self, reload).await
    }
    async fn find_racks(&self, query: &RackQuery, reload: bool) -> Result<Vec<Rack>, Device42Error> {
        facilities::find_racks(self, query, reload).await
    }
    async fn get_rack(&self, id: u64) -> Result<Rack, Device42Error> {
        facilities::get_rack(self, id).await
    }
    async fn mount_device(&self, mount: &RackMount) -> Result<ApiMessage, Device42Error> {
        facilities::mount_device(self, mount).await
    }

    // Inventory Operations
    async fn create_device(&self, params: &DeviceParams) -> Result<ApiMessage, Device42Error> {
        inventory::create_device(self, params).await
    }
    async fn get_device(&self, id: u64) -> Result<Device, Device42Error> {
        inventory::get_device(self, id).await
    }
    async fn get_device_by_name(&self, name: &str) -> Result<Option<Device>, Device42Error> {
        inventory::get_device_by_name(self, name).await
    }
    async fn get_device_by_serial(&self, serial: &str) -> Result<Option<Device>, Device42Error> {
        inventory::get_device_by_serial(self, serial).await
    }
    async fn add_device_mac(&self, device: &Device, mac: &str, port_name: Option<&str>) -> Result<ApiMessage, Device42Error> {
        inventory::add_device_mac(self, device, mac, port_name).await
    }
    async fn add_device_ip(&self, device: &Device, ip: &str, mac: Option<&str>) -> Result<ApiMessage, Device42Error> {
        inventory::add_device_ip(self, device, ip, mac).await
    }
    async fn create_hardware(&self, params: &HardwareParams) -> Result<ApiMessage, Device42Error> {
        inventory::create_hardware(self, params).await
    }
    async fn create_asset(&self, params: &AssetParams) -> Result<ApiMessage, Device42Error> {
        inventory::create_asset(self, params).await
    }
    async fn get_asset(&self, id: u64) -> Result<Asset, Device42Error> {
        inventory::get_asset(self, id).await
    }
    async fn list_assets(&self, reload: bool) -> Result<Vec<Asset>, Device42Error> {
        inventory::list_assets(self, reload).await
    }
    async fn find_assets_by_name(&self, name: &str) -> Result<Vec<Asset>, Device42Error> {
        inventory::find_assets_by_name(self, name).await
    }
    async fn list_patch_panels(&self) -> Result<Vec<Asset>, Device42Error> {
        inventory::list_patch_panels(self).await
    }
    async fn list_patch_panel_models(&self) -> Result<Vec<PatchPanelModel>, Device42Error> {
        inventory::list_patch_panel_models(self).await
    }
    async fn create_patch_panel_port(&self, params: &PatchPanelPortParams) -> Result<ApiMessage, Device42Error> {
        inventory::create_patch_panel_port(self, params).await
    }
    async fn list_pdu_models(&self) -> Result<Vec<PduModel>, Device42Error> {
        inventory::list_pdu_models(self).await
    }
    async fn create_pdu(&self, params: &PduParams) -> Result<ApiMessage, Device42Error> {
        inventory::create_pdu(self, params).await
    }

    // IPAM Operations
    async fn create_mac_address(&self, params: &MacAddressParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_mac_address(self, params).await
    }
    async fn list_mac_addresses(&self, reload: bool) -> Result<Vec<MacAddress>, Device42Error> {
        ipam::list_mac_addresses(self, reload).await
    }
    async fn get_mac_by_address(&self, mac: &str, reload: bool) -> Result<Option<MacAddress>, Device42Error> {
        ipam::get_mac_by_address(self, mac, reload).await
    }
    async fn create_ip_address(&self, params: &IpAddressParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_ip_address(self, params).await
    }
    async fn create_subnet(&self, params: &SubnetParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_subnet(self, params).await
    }
    async fn create_vlan(&self, params: &VlanParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_vlan(self, params).await
    }
    async fn create_switchport(&self, params: &SwitchportParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_switchport(self, params).await
    }
    async fn create_dns_record(&self, params: &DnsRecordParams) -> Result<ApiMessage, Device42Error> {
        ipam::create_dns_record(self, params).await
    }
    async fn create_address_dns_records(&self, fqdn: &str, ip: &str, nameserver: Option<&str>, ttl: u32) -> Result<(ApiMessage, ApiMessage), Device42Error> {
        ipam::create_address_dns_records(self, fqdn, ip, nameserver, ttl).await
    }

    // Commercial Operations
    async fn create_customer(&self, params: &CustomerParams) -> Result<ApiMessage, Device42Error> {
        commercial::create_customer(self, params).await
    }
    async fn create_customer_contact(&self, params: &CustomerContactParams) -> Result<ApiMessage, Device42Error> {
        commercial::create_customer_contact(self, params).await
    }
    async fn list_customers(&self, reload: bool) -> Result<Vec<Customer>, Device42Error> {
        commercial::list_customers(self, reload).await
    }
    async fn get_customer_by_name(&self, name: &str, reload: bool) -> Result<Option<Customer>, Device42Error> {
        commercial::get_customer_by_name(self, name, reload).await
    }
    async fn list_service_levels(&self, reload: bool) -> Result<Vec<ServiceLevel>, Device42Error> {
        commercial::list_service_levels(self, reload).await
    }
    async fn get_service_level_by_name(&self, name: &str, reload: bool) -> Result<Option<ServiceLevel>, Device42Error> {
        commercial::get_service_level_by_name(self, name, reload).await
    }

    // Extras Operations
    async fn put_custom_field(&self, target: CustomFieldTarget, params: &CustomFieldParams) -> Result<ApiMessage, Device42Error> {
        extras::put_custom_field(self, target, params).await
    }
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, Device42Error> {
        extras::list_history(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_lookup_building() {
        let mock = MockDevice42Client::new("http://test-d42");
        let params = BuildingParams {
            name: "Test Building".to_string(),
            address: Some("somewhere in the city".to_string()),
            ..BuildingParams::default()
        };
        let rsp = mock.create_building(&params).await.unwrap();
        assert!(rsp.ok() && rsp.applied());
        let id = rsp.result_id().unwrap();

        let found = mock.get_building_by_name("Test Building", false).await.unwrap().unwrap();
        assert_eq!(found.building_id, Some(id));
        assert_eq!(found.address.as_deref(), Some("somewhere in the city"));
    }

    #[tokio::test]
    async fn mount_device_auto_picks_next_free_slot() {
        let mock = MockDevice42Client::new("http://test-d42");
        mock.add_rack(Rack {
            rack_id: Some(80),
            name: "TestRack1".to_string(),
            size: Some(42),
            devices: vec![RackDevice {
                device_id: Some(1),
                name: Some("Test Device".to_string()),
                start_at: Some(1.0),
                ..RackDevice::default()
            }],
            ..Rack::default()
        });
        mock.add_device(Device {
            device_id: Some(2),
            name: "Second Device".to_string(),
            ..Device::default()
        });

        let rsp = mock
            .mount_device(&RackMount {
                rack_id: 80,
                device: "Second Device".to_string(),
                position: SlotRequest::Auto,
            })
            .await
            .unwrap();
        assert!(rsp.ok());

        let rack = mock.get_rack(80).await.unwrap();
        let slots: Vec<f64> = rack.device_slots().keys().map(|s| s.0).collect();
        assert_eq!(slots, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn add_device_ip_falls_back_to_sole_mac() {
        let mock = MockDevice42Client::new("http://test-d42");
        let device = Device {
            device_id: Some(1),
            name: "Test Device".to_string(),
            mac_addresses: vec![MacAddress {
                macaddress: "00:00:00:00:00:02".to_string(),
                ..MacAddress::default()
            }],
            ..Device::default()
        };
        mock.add_device(device.clone());

        let rsp = mock.add_device_ip(&device, "2.2.2.2", None).await.unwrap();
        assert!(rsp.applied());

        let stored = mock.ip_addresses.lock().unwrap();
        let ip = stored.get("2.2.2.2").unwrap();
        assert_eq!(ip.macaddress.as_deref(), Some("00:00:00:00:00:02"));
        assert_eq!(ip.kind.as_deref(), Some("static"));
    }

    #[tokio::test]
    async fn address_dns_records_write_forward_and_reverse() {
        let mock = MockDevice42Client::new("http://test-d42");
        let (forward, reverse) = mock
            .create_address_dns_records("testdevice.localdomain", "1.1.1.1", None, 86400)
            .await
            .unwrap();
        assert!(forward.ok() && reverse.ok());

        let records = mock.dns_records_written();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "A");
        assert_eq!(records[0].domain, "localdomain");
        assert_eq!(records[1].kind, "PTR");
        assert_eq!(records[1].name.as_deref(), Some("1.1.1.1.in-addr.arpa"));
        assert_eq!(records[1].content.as_deref(), Some("testdevice.localdomain"));
    }
}

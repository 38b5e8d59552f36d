//! Device42Client trait for mocking
//!
//! This trait abstracts the Device42Client to enable mocking in unit tests.
//! The concrete Device42Client implements this trait, and tests can use mock
//! implementations.

use crate::error::Device42Error;
use crate::models::*;

/// Trait for Device42 API client operations
///
/// This trait enables mocking of Device42 API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait Device42ClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the credentials
    async fn validate_credentials(&self) -> Result<(), Device42Error>;

    /// Warm the name-keyed caches
    async fn preload(&self) -> Result<(), Device42Error>;

    // Facilities Operations
    async fn create_building(&self, params: &BuildingParams) -> Result<ApiMessage, Device42Error>;
    async fn list_buildings(&self, reload: bool) -> Result<Vec<Building>, Device42Error>;
    async fn get_building_by_name(&self, name: &str, reload: bool) -> Result<Option<Building>, Device42Error>;
    async fn create_room(&self, params: &RoomParams) -> Result<ApiMessage, Device42Error>;
    async fn list_rooms(&self, reload: bool) -> Result<Vec<Room>, Device42Error>;
    async fn get_room_by_name(&self, name: &str, reload: bool) -> Result<Option<Room>, Device42Error>;
    async fn get_room(&self, id: u64) -> Result<Room, Device42Error>;
    async fn create_rack(&self, params: &RackParams) -> Result<ApiMessage, Device42Error>;
    async fn list_racks(&self, reload: bool) -> Result<Vec<Rack>, Device42Error>;
    async fn find_racks(&self, query: &RackQuery, reload: bool) -> Result<Vec<Rack>, Device42Error>;
    async fn get_rack(&self, id: u64) -> Result<Rack, Device42Error>;
    async fn mount_device(&self, mount: &RackMount) -> Result<ApiMessage, Device42Error>;

    // Inventory Operations
    async fn create_device(&self, params: &DeviceParams) -> Result<ApiMessage, Device42Error>;
    async fn get_device(&self, id: u64) -> Result<Device, Device42Error>;
    async fn get_device_by_name(&self, name: &str) -> Result<Option<Device>, Device42Error>;
    async fn get_device_by_serial(&self, serial: &str) -> Result<Option<Device>, Device42Error>;
    async fn add_device_mac(&self, device: &Device, mac: &str, port_name: Option<&str>) -> Result<ApiMessage, Device42Error>;
    async fn add_device_ip(&self, device: &Device, ip: &str, mac: Option<&str>) -> Result<ApiMessage, Device42Error>;
    async fn create_hardware(&self, params: &HardwareParams) -> Result<ApiMessage, Device42Error>;
    async fn create_asset(&self, params: &AssetParams) -> Result<ApiMessage, Device42Error>;
    async fn get_asset(&self, id: u64) -> Result<Asset, Device42Error>;
    async fn list_assets(&self, reload: bool) -> Result<Vec<Asset>, Device42Error>;
    async fn find_assets_by_name(&self, name: &str) -> Result<Vec<Asset>, Device42Error>;
    async fn list_patch_panels(&self) -> Result<Vec<Asset>, Device42Error>;
    async fn list_patch_panel_models(&self) -> Result<Vec<PatchPanelModel>, Device42Error>;
    async fn create_patch_panel_port(&self, params: &PatchPanelPortParams) -> Result<ApiMessage, Device42Error>;
    async fn list_pdu_models(&self) -> Result<Vec<PduModel>, Device42Error>;
    async fn create_pdu(&self, params: &PduParams) -> Result<ApiMessage, Device42Error>;

    // IPAM Operations
    async fn create_mac_address(&self, params: &MacAddressParams) -> Result<ApiMessage, Device42Error>;
    async fn list_mac_addresses(&self, reload: bool) -> Result<Vec<MacAddress>, Device42Error>;
    async fn get_mac_by_address(&self, mac: &str, reload: bool) -> Result<Option<MacAddress>, Device42Error>;
    async fn create_ip_address(&self, params: &IpAddressParams) -> Result<ApiMessage, Device42Error>;
    async fn create_subnet(&self, params: &SubnetParams) -> Result<ApiMessage, Device42Error>;
    async fn create_vlan(&self, params: &VlanParams) -> Result<ApiMessage, Device42Error>;
    async fn create_switchport(&self, params: &SwitchportParams) -> Result<ApiMessage, Device42Error>;
    async fn create_dns_record(&self, params: &DnsRecordParams) -> Result<ApiMessage, Device42Error>;
    async fn create_address_dns_records(&self, fqdn: &str, ip: &str, nameserver: Option<&str>, ttl: u32) -> Result<(ApiMessage, ApiMessage), Device42Error>;

    // Commercial Operations
    async fn create_customer(&self, params: &CustomerParams) -> Result<ApiMessage, Device42Error>;
    async fn create_customer_contact(&self, params: &CustomerContactParams) -> Result<ApiMessage, Device42Error>;
    async fn list_customers(&self, reload: bool) -> Result<Vec<Customer>, Device42Error>;
    async fn get_customer_by_name(&self, name: &str, reload: bool) -> Result<Option<Customer>, Device42Error>;
    async fn list_service_levels(&self, reload: bool) -> Result<Vec<ServiceLevel>, Device42Error>;
    async fn get_service_level_by_name(&self, name: &str, reload: bool) -> Result<Option<ServiceLevel>, Device42Error>;

    // Extras Operations
    async fn put_custom_field(&self, target: CustomFieldTarget, params: &CustomFieldParams) -> Result<ApiMessage, Device42Error>;
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, Device42Error>;
}

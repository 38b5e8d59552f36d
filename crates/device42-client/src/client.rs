//! Device42 API client
//!
//! Implements the Device42 REST API client for DCIM/IPAM operations.
//! Endpoints live under /api/1.0/ except the device and IP-address write
//! endpoints, which are unversioned.

use crate::common::{query, HttpClient};
use crate::device42_trait::Device42ClientTrait;
use crate::error::Device42Error;
use crate::models::*;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Device42 API client.
///
/// Holds name-keyed caches for the collections the API is commonly asked
/// about repeatedly (buildings, rooms, racks, customers, service levels,
/// MAC addresses) and an id-keyed asset cache. Cached lookups only touch
/// the network on first use or when asked to reload. Cloning the client
/// shares the caches.
#[derive(Debug, Clone)]
pub struct Device42Client {
    http: HttpClient,
    buildings: Arc<Mutex<HashMap<String, Building>>>,
    rooms: Arc<Mutex<HashMap<String, Room>>>,
    racks: Arc<Mutex<HashMap<String, Rack>>>,
    customers: Arc<Mutex<HashMap<String, Customer>>>,
    service_levels: Arc<Mutex<HashMap<String, ServiceLevel>>>,
    mac_addresses: Arc<Mutex<HashMap<String, MacAddress>>>,
    assets: Arc<Mutex<HashMap<u64, Asset>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Device42Client {
    /// Create a new Device42 client
    ///
    /// # Arguments
    /// * `base_url` - Appliance base URL (e.g., "https://d42.example.com")
    /// * `username` / `password` - HTTP Basic credentials
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Device42Error> {
        Self::from_builder(Client::builder(), base_url.into(), username.into(), password.into())
    }

    /// Like [`Device42Client::new`] but accepting invalid TLS certificates.
    /// Appliances commonly ship self-signed certificates.
    pub fn new_insecure(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Device42Error> {
        Self::from_builder(
            Client::builder().danger_accept_invalid_certs(true),
            base_url.into(),
            username.into(),
            password.into(),
        )
    }

    fn from_builder(
        builder: reqwest::ClientBuilder,
        base_url: String,
        username: String,
        password: String,
    ) -> Result<Self, Device42Error> {
        let client = builder
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Device42Error::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, username, password),
            buildings: Arc::new(Mutex::new(HashMap::new())),
            rooms: Arc::new(Mutex::new(HashMap::new())),
            racks: Arc::new(Mutex::new(HashMap::new())),
            customers: Arc::new(Mutex::new(HashMap::new())),
            service_levels: Arc::new(Mutex::new(HashMap::new())),
            mac_addresses: Arc::new(Mutex::new(HashMap::new())),
            assets: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the credentials by making a lightweight authenticated request.
    ///
    /// Probes the service-level endpoint (the smallest authenticated
    /// collection); bad credentials surface as
    /// [`Device42Error::Authentication`].
    pub async fn validate_credentials(&self) -> Result<(), Device42Error> {
        debug!("Validating Device42 credentials and connectivity");
        let _: serde_json::Value = self.http.get("service_level").await?;
        debug!("Credentials validated successfully");
        Ok(())
    }

    /// Warm the name-keyed caches in one pass: buildings, customers, racks,
    /// rooms and service levels.
    pub async fn preload(&self) -> Result<(), Device42Error> {
        self.fill_buildings(true).await?;
        self.fill_customers(true).await?;
        self.fill_racks(true).await?;
        self.fill_rooms(true).await?;
        self.fill_service_levels(true).await?;
        Ok(())
    }

    // ====================
    // Facilities API Methods
    // ====================

    /// Create or update a building
    pub async fn create_building(&self, params: &BuildingParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating building {}", params.name);
        self.http.post_form("buildings", true, &params.form()).await
    }

    /// List all buildings
    pub async fn list_buildings(&self, reload: bool) -> Result<Vec<Building>, Device42Error> {
        self.fill_buildings(reload).await?;
        Ok(lock(&self.buildings).values().cloned().collect())
    }

    /// Get a building by name from the cache, filling it if needed
    pub async fn get_building_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<Building>, Device42Error> {
        self.fill_buildings(reload).await?;
        Ok(lock(&self.buildings).get(name).cloned())
    }

    /// Create or update a room
    pub async fn create_room(&self, params: &RoomParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating room {}", params.name);
        self.http.post_form("rooms", true, &params.form()).await
    }

    /// List all rooms
    pub async fn list_rooms(&self, reload: bool) -> Result<Vec<Room>, Device42Error> {
        self.fill_rooms(reload).await?;
        Ok(lock(&self.rooms).values().cloned().collect())
    }

    /// Get a room by name from the cache, filling it if needed
    pub async fn get_room_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<Room>, Device42Error> {
        self.fill_rooms(reload).await?;
        Ok(lock(&self.rooms).get(name).cloned())
    }

    /// Get a room by id, with its racks, devices and assets populated
    pub async fn get_room(&self, id: u64) -> Result<Room, Device42Error> {
        debug!("Fetching room {} from Device42", id);
        self.http.get(&format!("rooms/{id}")).await
    }

    /// Create or update a rack
    pub async fn create_rack(&self, params: &RackParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating rack {}", params.name);
        self.http.post_form("racks", true, &params.form()).await
    }

    /// List all racks
    pub async fn list_racks(&self, reload: bool) -> Result<Vec<Rack>, Device42Error> {
        self.fill_racks(reload).await?;
        Ok(lock(&self.racks).values().cloned().collect())
    }

    /// Filter cached racks by name, building and/or room
    pub async fn find_racks(
        &self,
        query: &RackQuery,
        reload: bool,
    ) -> Result<Vec<Rack>, Device42Error> {
        self.fill_racks(reload).await?;
        Ok(lock(&self.racks)
            .values()
            .filter(|r| query.matches(r))
            .cloned()
            .collect())
    }

    /// Get a rack by id, with its slot occupancy populated
    pub async fn get_rack(&self, id: u64) -> Result<Rack, Device42Error> {
        debug!("Fetching rack {} from Device42", id);
        self.http.get(&format!("racks/{id}")).await
    }

    /// Mount a device into a rack, at a concrete slot or the next free one
    pub async fn mount_device(&self, mount: &RackMount) -> Result<ApiMessage, Device42Error> {
        mount.validate()?;
        debug!(
            "Mounting device {} into rack {} at {}",
            mount.device, mount.rack_id, mount.position
        );
        self.http.post_form("device/rack", true, &mount.form()).await
    }

    // ====================
    // Inventory API Methods
    // ====================

    /// Create or update a device. This endpoint is unversioned.
    pub async fn create_device(&self, params: &DeviceParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating device {}", params.name);
        self.http.post_form("device", false, &params.form()).await
    }

    /// Get a device by id, following nested objects
    pub async fn get_device(&self, id: u64) -> Result<Device, Device42Error> {
        debug!("Fetching device {} from Device42", id);
        self.http.get(&format!("devices/id/{id}/?follow=yes")).await
    }

    /// Get a device by name
    ///
    /// # Returns
    /// * `Ok(Some(Device))` - The device if found
    /// * `Ok(None)` - If no device matches
    pub async fn get_device_by_name(&self, name: &str) -> Result<Option<Device>, Device42Error> {
        debug!("Fetching device by name {}", name);
        let path = format!("devices/name/{}/?follow=yes", urlencoding::encode(name));
        match self.http.get(&path).await {
            Ok(device) => Ok(Some(device)),
            Err(Device42Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a device by serial number
    pub async fn get_device_by_serial(&self, serial: &str) -> Result<Option<Device>, Device42Error> {
        debug!("Fetching device by serial {}", serial);
        let path = format!("devices/serial/{}/?follow=yes", urlencoding::encode(serial));
        match self.http.get(&path).await {
            Ok(device) => Ok(Some(device)),
            Err(Device42Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Register a MAC address bound to a device
    pub async fn add_device_mac(
        &self,
        device: &Device,
        mac: &str,
        port_name: Option<&str>,
    ) -> Result<ApiMessage, Device42Error> {
        let params = MacAddressParams {
            macaddress: mac.to_string(),
            port_name: port_name.map(str::to_string),
            device: Some(device.name.clone()),
            ..MacAddressParams::default()
        };
        self.create_mac_address(&params).await
    }

    /// Register a static IP address bound to a device.
    ///
    /// When `mac` is omitted and the device carries exactly one MAC address,
    /// that one is used.
    pub async fn add_device_ip(
        &self,
        device: &Device,
        ip: &str,
        mac: Option<&str>,
    ) -> Result<ApiMessage, Device42Error> {
        let macaddress = mac
            .map(str::to_string)
            .or_else(|| device.sole_mac().map(|m| m.macaddress.clone()));
        let params = IpAddressParams {
            ipaddress: ip.to_string(),
            macaddress,
            device: Some(device.name.clone()),
            kind: Some("static".to_string()),
            ..IpAddressParams::default()
        };
        self.create_ip_address(&params).await
    }

    /// Create or update a hardware model
    pub async fn create_hardware(&self, params: &HardwareParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating hardware model {}", params.name);
        self.http.post_form("hardwares", true, &params.form()).await
    }

    /// Create or update an asset
    pub async fn create_asset(&self, params: &AssetParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating asset of type {}", params.kind);
        self.http.post_form("assets", true, &params.form()).await
    }

    /// Get an asset by id
    pub async fn get_asset(&self, id: u64) -> Result<Asset, Device42Error> {
        debug!("Fetching asset {} from Device42", id);
        self.http.get(&format!("assets/{id}")).await
    }

    /// List all assets
    pub async fn list_assets(&self, reload: bool) -> Result<Vec<Asset>, Device42Error> {
        self.fill_assets(reload).await?;
        Ok(lock(&self.assets).values().cloned().collect())
    }

    /// Assets matching a name exactly
    pub async fn find_assets_by_name(&self, name: &str) -> Result<Vec<Asset>, Device42Error> {
        self.fill_assets(false).await?;
        Ok(lock(&self.assets)
            .values()
            .filter(|a| a.name.as_deref() == Some(name))
            .cloned()
            .collect())
    }

    /// Assets whose type is "Patch Panel"
    pub async fn list_patch_panels(&self) -> Result<Vec<Asset>, Device42Error> {
        self.fill_assets(false).await?;
        Ok(lock(&self.assets)
            .values()
            .filter(|a| a.kind.as_deref() == Some("Patch Panel"))
            .cloned()
            .collect())
    }

    /// List patch panel models (read-only upstream)
    pub async fn list_patch_panel_models(&self) -> Result<Vec<PatchPanelModel>, Device42Error> {
        debug!("Fetching patch panel models");
        query::fetch_list(&self.http, "patch_panel_models").await
    }

    /// Wire a patch panel port
    pub async fn create_patch_panel_port(
        &self,
        params: &PatchPanelPortParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!(
            "Wiring patch panel {} port {}",
            params.patch_panel_id, params.number
        );
        self.http.post_form("patch_panel_ports", true, &params.form()).await
    }

    /// List PDU models (read-only upstream)
    pub async fn list_pdu_models(&self) -> Result<Vec<PduModel>, Device42Error> {
        debug!("Fetching PDU models");
        query::fetch_keyed(&self.http, "pdu_models", "pdu_models").await
    }

    /// Create or update a PDU. A rack placement routes the write to the
    /// rack endpoint.
    pub async fn create_pdu(&self, params: &PduParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating PDU {}", params.name);
        let path = if params.rack_id.is_some() { "pdus/rack" } else { "pdus" };
        self.http.post_form(path, true, &params.form()).await
    }

    // ====================
    // IPAM API Methods
    // ====================

    /// Register a MAC address
    pub async fn create_mac_address(
        &self,
        params: &MacAddressParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Registering MAC address {}", params.macaddress);
        self.http.post_form("macs", true, &params.form()).await
    }

    /// List all MAC addresses
    pub async fn list_mac_addresses(&self, reload: bool) -> Result<Vec<MacAddress>, Device42Error> {
        self.fill_macs(reload).await?;
        Ok(lock(&self.mac_addresses).values().cloned().collect())
    }

    /// Get a MAC address record by address from the cache
    pub async fn get_mac_by_address(
        &self,
        mac: &str,
        reload: bool,
    ) -> Result<Option<MacAddress>, Device42Error> {
        self.fill_macs(reload).await?;
        Ok(lock(&self.mac_addresses).get(mac).cloned())
    }

    /// Register an IP address. This endpoint is unversioned.
    pub async fn create_ip_address(
        &self,
        params: &IpAddressParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Registering IP address {}", params.ipaddress);
        self.http.post_form("ip", false, &params.form()).await
    }

    /// Create or update a subnet
    pub async fn create_subnet(&self, params: &SubnetParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating subnet {}/{}", params.network, params.mask_bits);
        self.http.post_form("subnets", true, &params.form()).await
    }

    /// Create a VLAN
    pub async fn create_vlan(&self, params: &VlanParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating VLAN {}", params.number);
        self.http.post_form("vlans", true, &params.form()).await
    }

    /// Create or update a switch port
    pub async fn create_switchport(
        &self,
        params: &SwitchportParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating switchport {}", params.port);
        self.http.post_form("switchports", true, &params.form()).await
    }

    /// Create a DNS record. The zone must already exist server-side.
    pub async fn create_dns_record(
        &self,
        params: &DnsRecordParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating {} record for {}", params.kind, params.domain);
        self.http.post_form("dns/records", true, &params.form()).await
    }

    /// Write the forward A record and the matching reverse PTR record for an
    /// address.
    ///
    /// `fqdn` must carry at least one dot; the record domains are derived
    /// from its tail labels and from the reversed address. The zones must
    /// already exist server-side.
    pub async fn create_address_dns_records(
        &self,
        fqdn: &str,
        ip: &str,
        nameserver: Option<&str>,
        ttl: u32,
    ) -> Result<(ApiMessage, ApiMessage), Device42Error> {
        let domain = parent_domain(fqdn).ok_or_else(|| {
            Device42Error::InvalidRequest(format!(
                "\"{fqdn}\" is not a fully qualified name"
            ))
        })?;
        let addr: std::net::Ipv4Addr = ip.parse().map_err(|_| {
            Device42Error::InvalidRequest(format!("\"{ip}\" is not an IPv4 address"))
        })?;

        let forward = DnsRecordParams {
            domain: domain.to_string(),
            kind: "A".to_string(),
            nameserver: nameserver.map(str::to_string),
            name: Some(fqdn.to_string()),
            content: Some(addr.to_string()),
            ttl: Some(ttl),
            ..DnsRecordParams::default()
        };
        let forward_rsp = self.create_dns_record(&forward).await?;

        let ptr_name = ptr_record_name(addr);
        let reverse = DnsRecordParams {
            // parent_domain of a generated in-addr.arpa name always exists
            domain: parent_domain(&ptr_name).unwrap_or("in-addr.arpa").to_string(),
            kind: "PTR".to_string(),
            nameserver: nameserver.map(str::to_string),
            name: Some(ptr_name),
            content: Some(fqdn.to_string()),
            ttl: Some(ttl),
            ..DnsRecordParams::default()
        };
        let reverse_rsp = self.create_dns_record(&reverse).await?;

        Ok((forward_rsp, reverse_rsp))
    }

    // ====================
    // Commercial API Methods
    // ====================

    /// Create or update a customer
    pub async fn create_customer(&self, params: &CustomerParams) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating customer {}", params.name);
        self.http.post_form("customers", true, &params.form()).await
    }

    /// Attach a contact record to a customer
    pub async fn create_customer_contact(
        &self,
        params: &CustomerContactParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Creating contact {} for customer {}", params.name, params.customer);
        self.http.post_form("customers/contacts", true, &params.form()).await
    }

    /// List all customers
    pub async fn list_customers(&self, reload: bool) -> Result<Vec<Customer>, Device42Error> {
        self.fill_customers(reload).await?;
        Ok(lock(&self.customers).values().cloned().collect())
    }

    /// Get a customer by name from the cache
    pub async fn get_customer_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<Customer>, Device42Error> {
        self.fill_customers(reload).await?;
        Ok(lock(&self.customers).get(name).cloned())
    }

    /// List service levels (read-only upstream)
    pub async fn list_service_levels(&self, reload: bool) -> Result<Vec<ServiceLevel>, Device42Error> {
        self.fill_service_levels(reload).await?;
        Ok(lock(&self.service_levels).values().cloned().collect())
    }

    /// Get a service level by name from the cache
    pub async fn get_service_level_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<ServiceLevel>, Device42Error> {
        self.fill_service_levels(reload).await?;
        Ok(lock(&self.service_levels).get(name).cloned())
    }

    // ====================
    // Extras API Methods
    // ====================

    /// Set a custom key/value pair on a resource.
    /// Devices use the API's special path; everything else goes through
    /// `custom_fields/{target}/`.
    pub async fn put_custom_field(
        &self,
        target: CustomFieldTarget,
        params: &CustomFieldParams,
    ) -> Result<ApiMessage, Device42Error> {
        params.validate()?;
        debug!("Setting custom field {} on {}", params.key, params.name);
        self.http.put_form(target.path(), &params.form()).await
    }

    /// List audit history entries (read-only upstream)
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>, Device42Error> {
        debug!("Fetching history");
        query::fetch_list(&self.http, "history").await
    }

    // ====================
    // Cache fills
    // ====================

    async fn fill_buildings(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.buildings).is_empty() {
            return Ok(());
        }
        let list: Vec<Building> = query::fetch_keyed(&self.http, "buildings", "buildings").await?;
        debug!("Caching {} buildings", list.len());
        let mut cache = lock(&self.buildings);
        cache.clear();
        for building in list {
            cache.insert(building.name.clone(), building);
        }
        Ok(())
    }

    async fn fill_rooms(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.rooms).is_empty() {
            return Ok(());
        }
        let list: Vec<Room> = query::fetch_keyed(&self.http, "rooms", "rooms").await?;
        debug!("Caching {} rooms", list.len());
        let mut cache = lock(&self.rooms);
        cache.clear();
        for room in list {
            cache.insert(room.name.clone(), room);
        }
        Ok(())
    }

    async fn fill_racks(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.racks).is_empty() {
            return Ok(());
        }
        let list: Vec<Rack> = query::fetch_keyed(&self.http, "racks", "racks").await?;
        debug!("Caching {} racks", list.len());
        let mut cache = lock(&self.racks);
        cache.clear();
        for rack in list {
            cache.insert(rack.name.clone(), rack);
        }
        Ok(())
    }

    async fn fill_customers(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.customers).is_empty() {
            return Ok(());
        }
        // Upstream capitalizes this collection key
        let list: Vec<Customer> = query::fetch_keyed(&self.http, "customers", "Customers").await?;
        debug!("Caching {} customers", list.len());
        let mut cache = lock(&self.customers);
        cache.clear();
        for customer in list {
            cache.insert(customer.name.clone(), customer);
        }
        Ok(())
    }

    async fn fill_service_levels(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.service_levels).is_empty() {
            return Ok(());
        }
        let list: Vec<ServiceLevel> = query::fetch_list(&self.http, "service_level").await?;
        debug!("Caching {} service levels", list.len());
        let mut cache = lock(&self.service_levels);
        cache.clear();
        for level in list {
            cache.insert(level.name.clone(), level);
        }
        Ok(())
    }

    async fn fill_macs(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.mac_addresses).is_empty() {
            return Ok(());
        }
        let list: Vec<MacAddress> = query::fetch_keyed(&self.http, "macs", "macaddresses").await?;
        debug!("Caching {} MAC addresses", list.len());
        let mut cache = lock(&self.mac_addresses);
        cache.clear();
        for mac in list {
            cache.insert(mac.macaddress.clone(), mac);
        }
        Ok(())
    }

    async fn fill_assets(&self, reload: bool) -> Result<(), Device42Error> {
        if !reload && !lock(&self.assets).is_empty() {
            return Ok(());
        }
        let list: Vec<Asset> = query::fetch_keyed(&self.http, "assets", "assets").await?;
        debug!("Caching {} assets", list.len());
        let mut cache = lock(&self.assets);
        cache.clear();
        for asset in list {
            if let Some(id) = asset.asset_id {
                cache.insert(id, asset);
            }
        }
        Ok(())
    }
}

/// Everything after the first label, if the name carries one
pub(crate) fn parent_domain(name: &str) -> Option<&str> {
    match name.split_once('.') {
        Some((_, rest)) if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

/// `d.c.b.a.in-addr.arpa` for the address `a.b.c.d`
pub(crate) fn ptr_record_name(addr: std::net::Ipv4Addr) -> String {
    let octets = addr.octets();
    format!(
        "{}.{}.{}.{}.in-addr.arpa",
        octets[3], octets[2], octets[1], octets[0]
    )
}

#[async_trait::async_trait]
impl Device42ClientTrait for Device42Client {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_credentials(&self) -> Result<(), Device42Error> {
        self.validate_credentials().await
    }

    async fn preload(&self) -> Result<(), Device42Error> {
        self.preload().await
    }

    async fn create_building(&self, params: &BuildingParams) -> Result<ApiMessage, Device42Error> {
        self.create_building(params).await
    }

    async fn list_buildings(&self, reload: bool) -> Result<Vec<Building>, Device42Error> {
        self.list_buildings(reload).await
    }

    async fn get_building_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<Building>, Device42Error> {
        self.get_building_by_name(name, reload).await
    }

    async fn create_room(&self, params: &RoomParams) -> Result<ApiMessage, Device42Error> {
        self.create_room(params).await
    }

    async fn list_rooms(&self, reload: bool) -> Result<Vec<Room>, Device42Error> {
        self.list_rooms(reload).await
    }

    async fn get_room_by_name(&self, name: &str, reload: bool) -> Result<Option<Room>, Device42Error> {
        self.get_room_by_name(name, reload).await
    }

    async fn get_room(&self, id: u64) -> Result<Room, Device42Error> {
        self.get_room(id).await
    }

    async fn create_rack(&self, params: &RackParams) -> Result<ApiMessage, Device42Error> {
        self.create_rack(params).await
    }

    async fn list_racks(&self, reload: bool) -> Result<Vec<Rack>, Device42Error> {
        self.list_racks(reload).await
    }

    async fn find_racks(&self, query: &RackQuery, reload: bool) -> Result<Vec<Rack>, Device42Error> {
        self.find_racks(query, reload).await
    }

    async fn get_rack(&self, id: u64) -> Result<Rack, Device42Error> {
        self.get_rack(id).await
    }

    async fn mount_device(&self, mount: &RackMount) -> Result<ApiMessage, Device42Error> {
        self.mount_device(mount).await
    }

    async fn create_device(&self, params: &DeviceParams) -> Result<ApiMessage, Device42Error> {
        self.create_device(params).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, Device42Error> {
        self.get_device(id).await
    }

    async fn get_device_by_name(&self, name: &str) -> Result<Option<Device>, Device42Error> {
        self.get_device_by_name(name).await
    }

    async fn get_device_by_serial(&self, serial: &str) -> Result<Option<Device>, Device42Error> {
        self.get_device_by_serial(serial).await
    }

    async fn add_device_mac(
        &self,
        device: &Device,
        mac: &str,
        port_name: Option<&str>,
    ) -> Result<ApiMessage, Device42Error> {
        self.add_device_mac(device, mac, port_name).await
    }

    async fn add_device_ip(
        &self,
        device: &Device,
        ip: &str,
        mac: Option<&str>,
    ) -> Result<ApiMessage, Device42Error> {
        self.add_device_ip(device, ip, mac).await
    }

    async fn create_hardware(&self, params: &HardwareParams) -> Result<ApiMessage, Device42Error> {
        self.create_hardware(params).await
    }

    async fn create_asset(&self, params: &AssetParams) -> Result<ApiMessage, Device42Error> {
        self.create_asset(params).await
    }

    async fn get_asset(&self, id: u64) -> Result<Asset, Device42Error> {
        self.get_asset(id).await
    }

    async fn list_assets(&self, reload: bool) -> Result<Vec<Asset>, Device42Error> {
        self.list_assets(reload).await
    }

    async fn find_assets_by_name(&self, name: &str) -> Result<Vec<Asset>, Device42Error> {
        self.find_assets_by_name(name).await
    }

    async fn list_patch_panels(&self) -> Result<Vec<Asset>, Device42Error> {
        self.list_patch_panels().await
    }

    async fn list_patch_panel_models(&self) -> Result<Vec<PatchPanelModel>, Device42Error> {
        self.list_patch_panel_models().await
    }

    async fn create_patch_panel_port(
        &self,
        params: &PatchPanelPortParams,
    ) -> Result<ApiMessage, Device42Error> {
        self.create_patch_panel_port(params).await
    }

    async fn list_pdu_models(&self) -> Result<Vec<PduModel>, Device42Error> {
        self.list_pdu_models().await
    }

    async fn create_pdu(&self, params: &PduParams) -> Result<ApiMessage, Device42Error> {
        self.create_pdu(params).await
    }

    async fn create_mac_address(&self, params: &MacAddressParams) -> Result<ApiMessage, Device42Error> {
        self.create_mac_address(params).await
    }

    async fn list_mac_addresses(&self, reload: bool) -> Result<Vec<MacAddress>, Device42Error> {
        self.list_mac_addresses(reload).await
    }

    async fn get_mac_by_address(
        &self,
        mac: &str,
        reload: bool,
    ) -> Result<Option<MacAddress>, Device42Error> {
        self.get_mac_by_address(mac, reload).await
    }

    async fn create_ip_address(&self, params: &IpAddressParams) -> Result<ApiMessage, Device42Error> {
        self.create_ip_address(params).await
    }

    async fn create_subnet(&self, params: &SubnetParams) -> Result<ApiMessage, Device42Error> {
        self.create_subnet(params).await
    }

    async fn create_vlan(&self, params: &VlanParams) -> Result<ApiMessage, Device42Error> {
        self.create_vlan(params).await
    }

    async fn create_switchport(&self, params: &SwitchportParams) -> Result<ApiMessage, Device42Error> {
        self.create_switchport(params).await
    }

    async fn create_dns_record(&self, params: &DnsRecordParams) -> Result<ApiMessage, Device42Error> {
        self.create_dns_record(params).await
    }

    async fn create_address_dns_records(
        &self,
        fqdn: &str,
        ip: &str,
        nameserver: Option<&str>,
        ttl: u32,
    ) -> Result<(ApiMessage, ApiMessage), Device42Error> {
        self.create_address_dns_records(fqdn, ip, nameserver, ttl).await
    }

    async fn create_customer(&self, params: &CustomerParams) -> Result<ApiMessage, Device42Error> {
        self.create_customer(params).await
    }

    async fn create_customer_contact(
        &self,
        params: &CustomerContactParams,
    ) -> Result<ApiMessage, Device42Error> {
        self.create_customer_contact(params).await
    }

    async fn list_customers(&self, reload: bool) -> Result<Vec<Customer>, Device42Error> {
        self.list_customers(reload).await
    }

    async fn get_customer_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<Customer>, Device42Error> {
        self.get_customer_by_name(name, reload).await
    }

    async fn list_service_levels(&self, reload: bool) -> Result<Vec<ServiceLevel>, Device42Error> {
        self.list_service_levels(reload).await
    }

    async fn get_service_level_by_name(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<ServiceLevel>, Device42Error> {
        self.get_service_level_by_name(name, reload).await
    }

    async fn put_custom_field(
        &self,
        target: CustomFieldTarget,
        params: &CustomFieldParams,
    ) -> Result<ApiMessage, Device42Error> {
        self.put_custom_field(target, params).await
    }

    async fn list_history(&self) -> Result<Vec<HistoryEntry>, Device42Error> {
        self.list_history().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_name_reverses_octets() {
        let addr: std::net::Ipv4Addr = "192.168.122.200".parse().unwrap();
        assert_eq!(ptr_record_name(addr), "200.122.168.192.in-addr.arpa");
    }

    #[test]
    fn parent_domain_strips_first_label() {
        assert_eq!(parent_domain("testdevice.localdomain"), Some("localdomain"));
        assert_eq!(
            parent_domain("1.1.1.1.in-addr.arpa"),
            Some("1.1.1.in-addr.arpa")
        );
        assert_eq!(parent_domain("localhost"), None);
        assert_eq!(parent_domain("trailing."), None);
    }

    fn rack(name: &str, building: Option<&str>, room: Option<&str>) -> Rack {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "building": building,
            "room": room,
        }))
        .unwrap()
    }

    #[test]
    fn rack_query_combines_filters() {
        let r1 = rack("TestRack1", Some("HQ"), Some("Test Room"));
        let r2 = rack("TestRack2", Some("HQ"), Some("Lab"));
        let r3 = rack("TestRack1", Some("DC2"), Some("Lab"));

        let by_name = RackQuery::named("TestRack1");
        assert!(by_name.matches(&r1));
        assert!(!by_name.matches(&r2));
        assert!(by_name.matches(&r3));

        let by_building_and_room = RackQuery {
            building: Some("HQ".to_string()),
            room: Some("Lab".to_string()),
            ..RackQuery::default()
        };
        assert!(!by_building_and_room.matches(&r1));
        assert!(by_building_and_room.matches(&r2));
        assert!(!by_building_and_room.matches(&r3));

        let everything = RackQuery::default();
        assert!(everything.matches(&r1) && everything.matches(&r2) && everything.matches(&r3));
    }
}

//! Device42 API models
//!
//! Read models match the JSON the 1.0 API returns; the `*Params` structs
//! describe write bodies, which the API takes form-encoded. Required fields
//! are plain fields, optional ones are `Option`s, and `validate()` covers
//! the few conditional rules the type system cannot express.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::Device42Error;

// ====================
// Response envelope
// ====================

/// Write-endpoint response envelope.
///
/// Successful writes answer `{"msg": [text, id, label, ...], "code": 0}`,
/// optionally with a trailing pair of booleans of which the second-to-last
/// element flags whether the write changed anything. On errors `msg` can be
/// a bare string with `code` nonzero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: i64,
    #[serde(default)]
    pub msg: serde_json::Value,
}

impl ApiMessage {
    /// The API signalled success
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The write actually changed something.
    ///
    /// Reads the second-to-last `msg` element; envelopes too short to carry
    /// the flag fall back to `ok()`.
    pub fn applied(&self) -> bool {
        match self.msg.as_array() {
            Some(arr) if arr.len() >= 2 => truthy(&arr[arr.len() - 2]),
            _ => self.ok(),
        }
    }

    /// Id of the created or updated object (`msg[1]`)
    pub fn result_id(&self) -> Option<u64> {
        let v = self.msg.as_array()?.get(1)?;
        v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    }

    /// Human-readable label of the affected object (`msg[2]`)
    pub fn label(&self) -> Option<&str> {
        self.msg.as_array()?.get(2)?.as_str()
    }

    /// The message text, whatever shape `msg` has
    pub fn message_text(&self) -> Option<&str> {
        match &self.msg {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(arr) => arr.first().and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

fn truthy(v: &serde_json::Value) -> bool {
    match v {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

// ====================
// Rack slots
// ====================

/// Rack position (`start_at`). Fractional units occur (half-U equipment),
/// so this is an ordered wrapper over the raw position.
#[derive(Debug, Clone, Copy)]
pub struct Slot(pub f64);

impl Slot {
    pub fn new(position: f64) -> Self {
        Self(position)
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requested mount position: a concrete slot or the next free one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotRequest {
    Auto,
    At(f64),
}

impl std::fmt::Display for SlotRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::At(pos) => write!(f, "{pos}"),
        }
    }
}

// ====================
// Facilities
// ====================

/// Building
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Building {
    pub building_id: Option<u64>,
    pub name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// Room. The by-id fetch populates the contents collections; the list
/// endpoint leaves them empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub room_id: Option<u64>,
    pub name: String,
    pub building: Option<String>,
    pub building_id: Option<u64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub racks: Vec<Rack>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// Rack, including its slot occupancy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rack {
    pub rack_id: Option<u64>,
    pub name: String,
    pub size: Option<u32>,
    pub room: Option<String>,
    pub building: Option<String>,
    pub room_id: Option<u64>,
    /// `"yes"` (default) or `"no"`; selects the occupancy iteration order
    pub numbering_start_from_bottom: Option<String>,
    pub first_number: Option<u32>,
    pub row: Option<String>,
    pub manufacturer: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub devices: Vec<RackDevice>,
    #[serde(default)]
    pub assets: Vec<RackAsset>,
    #[serde(default)]
    pub pdus: Vec<RackPdu>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Rack {
    /// Whether unit numbering starts at the bottom of the rack (the default)
    pub fn numbers_from_bottom(&self) -> bool {
        self.numbering_start_from_bottom.as_deref() != Some("no")
    }

    /// Mounted devices keyed by slot position. One occupant per position;
    /// a duplicate key keeps the last entry seen.
    pub fn device_slots(&self) -> BTreeMap<Slot, &RackDevice> {
        self.devices
            .iter()
            .filter_map(|d| d.start_at.map(|s| (Slot::new(s), d)))
            .collect()
    }

    /// Mounted assets keyed by slot position
    pub fn asset_slots(&self) -> BTreeMap<Slot, &RackAsset> {
        self.assets
            .iter()
            .filter_map(|a| a.start_at.map(|s| (Slot::new(s), a)))
            .collect()
    }

    /// Devices in slot order: ascending for top-down racks, descending for
    /// bottom-up ones.
    pub fn devices_in_order(&self) -> Vec<&RackDevice> {
        in_slot_order(self.device_slots(), self.numbers_from_bottom())
    }

    /// Assets in slot order, same direction rule as `devices_in_order`
    pub fn assets_in_order(&self) -> Vec<&RackAsset> {
        in_slot_order(self.asset_slots(), self.numbers_from_bottom())
    }
}

fn in_slot_order<T>(slots: BTreeMap<Slot, T>, from_bottom: bool) -> Vec<T> {
    let ordered: Vec<T> = slots.into_values().collect();
    if from_bottom {
        ordered.into_iter().rev().collect()
    } else {
        ordered
    }
}

/// Cached-rack filter; every set field must match
#[derive(Debug, Clone, Default)]
pub struct RackQuery {
    pub name: Option<String>,
    pub building: Option<String>,
    pub room: Option<String>,
}

impl RackQuery {
    /// Filter by rack name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the rack satisfies every set field
    pub fn matches(&self, rack: &Rack) -> bool {
        self.name.as_deref().is_none_or(|n| rack.name == n)
            && self
                .building
                .as_deref()
                .is_none_or(|b| rack.building.as_deref() == Some(b))
            && self.room.as_deref().is_none_or(|r| rack.room.as_deref() == Some(r))
    }
}

/// Device entry inside a rack payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RackDevice {
    pub device_id: Option<u64>,
    pub name: Option<String>,
    pub start_at: Option<f64>,
    pub size: Option<f64>,
    pub depth: Option<String>,
    pub orientation: Option<String>,
}

/// Asset entry inside a rack payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RackAsset {
    pub asset_id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_at: Option<f64>,
    pub size: Option<f64>,
    pub depth: Option<String>,
    pub orientation: Option<String>,
}

/// PDU entry inside a rack payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RackPdu {
    pub pdu_id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "where")]
    pub placement: Option<String>,
    pub start_at: Option<f64>,
    pub size: Option<f64>,
    pub depth: Option<String>,
    pub orientation: Option<String>,
}

// ====================
// Inventory
// ====================

/// Device as returned by `devices/id/{id}/?follow=yes` and friends.
///
/// The API reports the hardware model under `hw_model`; the alias folds it
/// into `hardware`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Device {
    pub device_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub serial_no: Option<String>,
    pub asset_no: Option<String>,
    pub uuid: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(alias = "hw_model")]
    pub hardware: Option<String>,
    pub service_level: Option<String>,
    pub in_service: Option<bool>,
    pub is_it_switch: Option<bool>,
    pub is_it_virtual_host: Option<bool>,
    pub is_it_blade_host: Option<bool>,
    pub virtual_host: Option<String>,
    pub blade_host: Option<String>,
    pub os: Option<String>,
    #[serde(default, deserialize_with = "stringly")]
    pub osver: Option<String>,
    pub memory: Option<f64>,
    pub cpucount: Option<u32>,
    pub cpupower: Option<u32>,
    pub cpucore: Option<u32>,
    pub hddcount: Option<u32>,
    pub hddsize: Option<f64>,
    pub hddraid: Option<String>,
    pub hddraid_type: Option<String>,
    pub customer: Option<String>,
    pub building: Option<String>,
    pub room: Option<String>,
    pub rack: Option<String>,
    pub rack_id: Option<u64>,
    pub start_at: Option<f64>,
    pub slot_no: Option<String>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_filtered")]
    pub ip_addresses: Vec<IpAddress>,
    #[serde(default, deserialize_with = "null_filtered")]
    pub mac_addresses: Vec<MacAddress>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Device {
    /// The device's sole MAC address, if it has exactly one
    pub fn sole_mac(&self) -> Option<&MacAddress> {
        match self.mac_addresses.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// IP address, as embedded in device payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpAddress {
    pub ip_id: Option<u64>,
    #[serde(alias = "ip")]
    pub ipaddress: String,
    pub tag: Option<String>,
    pub subnet: Option<String>,
    pub subnet_id: Option<u64>,
    pub macaddress: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// MAC address, from `macs/` or embedded in device payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacAddress {
    pub macaddress_id: Option<u64>,
    #[serde(alias = "mac")]
    pub macaddress: String,
    pub port_name: Option<String>,
    pub vlan_id: Option<u64>,
    pub device: Option<String>,
}

/// Asset (patch panels included; those carry `type == "Patch Panel"`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub service_level: Option<String>,
    pub serial_no: Option<String>,
    pub asset_no: Option<String>,
    pub customer_id: Option<u64>,
    pub location: Option<String>,
    pub building: Option<String>,
    pub room: Option<String>,
    pub rack: Option<String>,
    pub rack_id: Option<u64>,
    pub row: Option<String>,
    pub start_at: Option<f64>,
    pub size: Option<u32>,
    pub orientation: Option<String>,
    pub depth: Option<String>,
    pub vendor: Option<String>,
    pub imagefile_id: Option<u64>,
    pub contract_id: Option<u64>,
    pub patch_panel_model_id: Option<u64>,
    pub numbering_start_from: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// PDU model. Read-only upstream; the port list arrives under the API's
/// literal `"ports in pdu model"` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PduModel {
    pub pdu_model_id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "ports in pdu model", default)]
    pub ports: Vec<PduPort>,
}

impl PduModel {
    /// Total port count across all port groups
    pub fn total_ports(&self) -> u32 {
        self.ports.iter().filter_map(|p| p.pdu_port_count).sum()
    }
}

impl std::fmt::Display for PduModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self
            .ports
            .iter()
            .filter_map(|p| p.pdu_port_type.as_deref())
            .collect();
        write!(
            f,
            "pdu_model {} ports {} type {}",
            self.pdu_model_id.unwrap_or_default(),
            self.total_ports(),
            kinds.join(",")
        )
    }
}

/// Port group within a PDU model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PduPort {
    pub pdu_port_count: Option<u32>,
    pub pdu_port_type: Option<String>,
}

/// Patch panel model. Read-only upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchPanelModel {
    pub patch_panel_model_id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub port_type: Option<String>,
    pub number_of_ports: Option<u32>,
    pub number_of_ports_in_row: Option<u32>,
}

// ====================
// Commercial
// ====================

/// Customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: Option<u64>,
    pub name: String,
    pub contact_info: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "Contacts", default)]
    pub contacts: Vec<CustomerContact>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// Contact record attached to a customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerContact {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Service level. Read-only upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub id: Option<u64>,
    pub name: String,
}

impl std::fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.id.unwrap_or_default())
    }
}

// ====================
// Extras
// ====================

/// Custom key/value pair attached to a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomField {
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "stringly")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "stringly")]
    pub value2: Option<String>,
    pub notes: Option<String>,
}

/// Audit history entry. Read-only upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action_time: Option<String>,
    pub action: Option<String>,
    pub user: Option<String>,
    pub content_type: Option<String>,
}

impl HistoryEntry {
    /// Parsed action time, when the API supplied one
    pub fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.action_time
            .as_deref()
            .and_then(|t| t.parse::<chrono::DateTime<chrono::Utc>>().ok())
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.action_time.as_deref().unwrap_or(""),
            self.action.as_deref().unwrap_or(""),
            self.user.as_deref().unwrap_or(""),
            self.content_type.as_deref().unwrap_or("")
        )
    }
}

/// Resource kind a custom field attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomFieldTarget {
    Building,
    Room,
    Rack,
    Asset,
    Customer,
    Device,
}

impl CustomFieldTarget {
    /// API path for the PUT. Devices use a special path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Building => "custom_fields/building",
            Self::Room => "custom_fields/room",
            Self::Rack => "custom_fields/rack",
            Self::Asset => "custom_fields/asset",
            Self::Customer => "custom_fields/customer",
            Self::Device => "device/custom_field",
        }
    }
}

// ====================
// Write parameters
// ====================

/// Fields for creating or updating a building
#[derive(Debug, Clone, Default)]
pub struct BuildingParams {
    pub name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
}

impl BuildingParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add(&mut form, "address", &self.address);
        add(&mut form, "contact_name", &self.contact_name);
        add(&mut form, "contact_phone", &self.contact_phone);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Fields for creating or updating a room.
/// Either `building` or `building_id` must be given.
#[derive(Debug, Clone, Default)]
pub struct RoomParams {
    pub name: String,
    pub building: Option<String>,
    pub building_id: Option<u64>,
    pub notes: Option<String>,
}

impl RoomParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)?;
        if self.building.is_none() && self.building_id.is_none() {
            return Err(Device42Error::InvalidRequest(
                "either \"building\" or \"building_id\" must be set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add(&mut form, "building", &self.building);
        add_num(&mut form, "building_id", &self.building_id);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Fields for creating or updating a rack
#[derive(Debug, Clone, Default)]
pub struct RackParams {
    pub name: String,
    pub size: u32,
    pub room: String,
    pub building: Option<String>,
    pub room_id: Option<u64>,
    pub numbering_start_from_bottom: Option<bool>,
    pub first_number: Option<u32>,
    pub row: Option<String>,
    pub manufacturer: Option<String>,
    pub notes: Option<String>,
}

impl RackParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)?;
        require("room", &self.room)?;
        if self.size == 0 {
            return Err(Device42Error::InvalidRequest(
                "required field \"size\" not set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("name", self.name.clone()),
            ("size", self.size.to_string()),
            ("room", self.room.clone()),
        ];
        add(&mut form, "building", &self.building);
        add_num(&mut form, "room_id", &self.room_id);
        add_flag(&mut form, "numbering_start_from_bottom", &self.numbering_start_from_bottom);
        add_num(&mut form, "first_number", &self.first_number);
        add(&mut form, "row", &self.row);
        add(&mut form, "manufacturer", &self.manufacturer);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Mount request placing a device into a rack slot
#[derive(Debug, Clone)]
pub struct RackMount {
    pub rack_id: u64,
    pub device: String,
    pub position: SlotRequest,
}

impl RackMount {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("device", &self.device)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("device", self.device.clone()),
            ("rack_id", self.rack_id.to_string()),
            ("start_at", self.position.to_string()),
        ]
    }
}

/// Fields for creating or updating a device
#[derive(Debug, Clone, Default)]
pub struct DeviceParams {
    pub name: String,
    pub serial_no: Option<String>,
    pub asset_no: Option<String>,
    pub manufacturer: Option<String>,
    pub hardware: Option<String>,
    pub is_it_switch: Option<bool>,
    pub is_it_virtual_host: Option<bool>,
    pub is_it_blade_host: Option<bool>,
    pub in_service: Option<bool>,
    /// physical, virtual, blade, cluster or other
    pub kind: Option<String>,
    pub service_level: Option<String>,
    pub virtual_host: Option<String>,
    pub blade_host: Option<String>,
    pub slot_no: Option<u32>,
    pub storage_room_id: Option<u64>,
    pub storage_room: Option<String>,
    pub os: Option<String>,
    pub osver: Option<String>,
    pub memory: Option<f64>,
    pub cpucount: Option<u32>,
    pub cpupower: Option<u32>,
    pub cpucore: Option<u32>,
    pub hddcount: Option<u32>,
    pub hddsize: Option<f64>,
    pub hddraid: Option<String>,
    pub hddraid_type: Option<String>,
    pub devices: Option<String>,
    pub appcomps: Option<String>,
    pub customer: Option<String>,
    pub contract: Option<String>,
    pub aliases: Option<String>,
    pub notes: Option<String>,
    pub uuid: Option<String>,
}

impl DeviceParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add(&mut form, "serial_no", &self.serial_no);
        add(&mut form, "asset_no", &self.asset_no);
        add(&mut form, "manufacturer", &self.manufacturer);
        add(&mut form, "hardware", &self.hardware);
        add_flag(&mut form, "is_it_switch", &self.is_it_switch);
        add_flag(&mut form, "is_it_virtual_host", &self.is_it_virtual_host);
        add_flag(&mut form, "is_it_blade_host", &self.is_it_blade_host);
        add_flag(&mut form, "in_service", &self.in_service);
        add(&mut form, "type", &self.kind);
        add(&mut form, "service_level", &self.service_level);
        add(&mut form, "virtual_host", &self.virtual_host);
        add(&mut form, "blade_host", &self.blade_host);
        add_num(&mut form, "slot_no", &self.slot_no);
        add_num(&mut form, "storage_room_id", &self.storage_room_id);
        add(&mut form, "storage_room", &self.storage_room);
        add(&mut form, "os", &self.os);
        add(&mut form, "osver", &self.osver);
        add_num(&mut form, "memory", &self.memory);
        add_num(&mut form, "cpucount", &self.cpucount);
        add_num(&mut form, "cpupower", &self.cpupower);
        add_num(&mut form, "cpucore", &self.cpucore);
        add_num(&mut form, "hddcount", &self.hddcount);
        add_num(&mut form, "hddsize", &self.hddsize);
        add(&mut form, "hddraid", &self.hddraid);
        add(&mut form, "hddraid_type", &self.hddraid_type);
        add(&mut form, "devices", &self.devices);
        add(&mut form, "appcomps", &self.appcomps);
        add(&mut form, "customer", &self.customer);
        add(&mut form, "contract", &self.contract);
        add(&mut form, "aliases", &self.aliases);
        add(&mut form, "notes", &self.notes);
        add(&mut form, "uuid", &self.uuid);
        form
    }
}

/// Fields for creating or updating a hardware model
#[derive(Debug, Clone, Default)]
pub struct HardwareParams {
    pub name: String,
    /// 1=Regular, 2=Blade, 3=Other
    pub kind: Option<u8>,
    pub size: Option<u32>,
    /// 1=Full depth, 2=Half depth
    pub depth: Option<u8>,
    /// 1=Full Height, 2=Half Height, 3=Double Half Height, 4=Double Full Height
    pub blade_size: Option<u8>,
    pub part_no: Option<String>,
    pub watts: Option<u32>,
    pub spec_url: Option<String>,
    pub manufacturer: Option<String>,
    pub front_image_id: Option<u64>,
    pub back_image_id: Option<u64>,
    pub notes: Option<String>,
}

impl HardwareParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add_num(&mut form, "type", &self.kind);
        add_num(&mut form, "size", &self.size);
        add_num(&mut form, "depth", &self.depth);
        add_num(&mut form, "blade_size", &self.blade_size);
        add(&mut form, "part_no", &self.part_no);
        add_num(&mut form, "watts", &self.watts);
        add(&mut form, "spec_url", &self.spec_url);
        add(&mut form, "manufacturer", &self.manufacturer);
        add_num(&mut form, "front_image_id", &self.front_image_id);
        add_num(&mut form, "back_image_id", &self.back_image_id);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Fields for creating or updating an asset
#[derive(Debug, Clone, Default)]
pub struct AssetParams {
    /// AC, Breaker Panel, Cable Modem, DMARC, Fabric Extender, Fax Machine,
    /// Filler Panel, Monitor, Patch Panel, Patch Panel Module, Projector,
    /// Scanner, Shredder, Software, Speaker Phone, TAP Module
    pub kind: String,
    pub name: Option<String>,
    pub service_level: Option<String>,
    pub serial_no: Option<String>,
    pub asset_no: Option<String>,
    pub customer_id: Option<u64>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub building: Option<String>,
    pub vendor: Option<String>,
    pub imagefile_id: Option<u64>,
    pub contract_id: Option<u64>,
    pub rack_id: Option<u64>,
    pub room: Option<String>,
    pub rack: Option<String>,
    pub row: Option<String>,
    pub start_at: Option<f64>,
    pub size: Option<u32>,
    pub orientation: Option<String>,
    pub depth: Option<String>,
    pub patch_panel_model_id: Option<u64>,
    pub numbering_start_from: Option<String>,
}

impl AssetParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("type", &self.kind)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("type", self.kind.clone())];
        add(&mut form, "name", &self.name);
        add(&mut form, "service_level", &self.service_level);
        add(&mut form, "serial_no", &self.serial_no);
        add(&mut form, "asset_no", &self.asset_no);
        add_num(&mut form, "customer_id", &self.customer_id);
        add(&mut form, "location", &self.location);
        add(&mut form, "notes", &self.notes);
        add(&mut form, "building", &self.building);
        add(&mut form, "vendor", &self.vendor);
        add_num(&mut form, "imagefile_id", &self.imagefile_id);
        add_num(&mut form, "contract_id", &self.contract_id);
        add_num(&mut form, "rack_id", &self.rack_id);
        add(&mut form, "room", &self.room);
        add(&mut form, "rack", &self.rack);
        add(&mut form, "row", &self.row);
        add_num(&mut form, "start_at", &self.start_at);
        add_num(&mut form, "size", &self.size);
        add(&mut form, "orientation", &self.orientation);
        add(&mut form, "depth", &self.depth);
        add_num(&mut form, "patch_panel_model_id", &self.patch_panel_model_id);
        add(&mut form, "numbering_start_from", &self.numbering_start_from);
        form
    }
}

/// Fields for creating or updating a PDU.
/// Setting `rack_id` routes the write to the rack-placement endpoint.
#[derive(Debug, Clone, Default)]
pub struct PduParams {
    pub name: String,
    pub pdu_id: Option<u64>,
    pub rack_id: Option<u64>,
    pub device: Option<u64>,
    pub notes: Option<String>,
    /// left, right, above, below or mounted
    pub placement: Option<String>,
    pub start_at: Option<f64>,
    pub orientation: Option<String>,
}

impl PduParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add_num(&mut form, "pdu_id", &self.pdu_id);
        add_num(&mut form, "rack_id", &self.rack_id);
        add_num(&mut form, "device", &self.device);
        add(&mut form, "notes", &self.notes);
        add(&mut form, "where", &self.placement);
        add_num(&mut form, "start_at", &self.start_at);
        add(&mut form, "orientation", &self.orientation);
        form
    }
}

/// Fields for wiring a patch panel port.
/// Requires either `mac_id` or a device reference.
#[derive(Debug, Clone, Default)]
pub struct PatchPanelPortParams {
    pub patch_panel_id: u64,
    pub number: u32,
    pub mac_id: Option<u64>,
    pub device_id: Option<u64>,
    pub device: Option<String>,
    pub switchport_id: Option<u64>,
    pub switch: Option<String>,
    pub switchport: Option<String>,
    pub patch_panel_port_id: Option<u64>,
    pub label: Option<String>,
    pub obj_label1: Option<String>,
    pub obj_label2: Option<String>,
    pub back_connection_id: Option<u64>,
    pub back_switchport_id: Option<u64>,
    pub back_switch: Option<String>,
    pub back_switchport: Option<String>,
    pub cable_type: Option<String>,
}

impl PatchPanelPortParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        if self.patch_panel_id == 0 {
            return Err(Device42Error::InvalidRequest(
                "required field \"patch_panel_id\" not set".to_string(),
            ));
        }
        if self.number == 0 {
            return Err(Device42Error::InvalidRequest(
                "required field \"number\" not set".to_string(),
            ));
        }
        if self.mac_id.is_none() && self.device_id.is_none() && self.device.is_none() {
            return Err(Device42Error::InvalidRequest(
                "one of \"mac_id\", \"device_id\" or \"device\" must be set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("patch_panel_id", self.patch_panel_id.to_string()),
            ("number", self.number.to_string()),
        ];
        add_num(&mut form, "mac_id", &self.mac_id);
        add_num(&mut form, "device_id", &self.device_id);
        add(&mut form, "device", &self.device);
        add_num(&mut form, "switchport_id", &self.switchport_id);
        add(&mut form, "switch", &self.switch);
        add(&mut form, "switchport", &self.switchport);
        add_num(&mut form, "patch_panel_port_id", &self.patch_panel_port_id);
        add(&mut form, "label", &self.label);
        add(&mut form, "obj_label1", &self.obj_label1);
        add(&mut form, "obj_label2", &self.obj_label2);
        add_num(&mut form, "back_connection_id", &self.back_connection_id);
        add_num(&mut form, "back_switchport_id", &self.back_switchport_id);
        add(&mut form, "back_switch", &self.back_switch);
        add(&mut form, "back_switchport", &self.back_switchport);
        add(&mut form, "cable_type", &self.cable_type);
        form
    }
}

/// Fields for registering a MAC address
#[derive(Debug, Clone, Default)]
pub struct MacAddressParams {
    pub macaddress: String,
    /// Interface name
    pub port_name: Option<String>,
    pub vlan_id: Option<u64>,
    pub device: Option<String>,
}

impl MacAddressParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("macaddress", &self.macaddress)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("macaddress", self.macaddress.clone())];
        add(&mut form, "port_name", &self.port_name);
        add_num(&mut form, "vlan_id", &self.vlan_id);
        add(&mut form, "device", &self.device);
        form
    }
}

/// Fields for registering an IP address
#[derive(Debug, Clone, Default)]
pub struct IpAddressParams {
    pub ipaddress: String,
    /// Label for the interface
    pub tag: Option<String>,
    pub subnet: Option<String>,
    pub macaddress: Option<String>,
    pub device: Option<String>,
    /// static, dhcp or reserved
    pub kind: Option<String>,
}

impl IpAddressParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("ipaddress", &self.ipaddress)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("ipaddress", self.ipaddress.clone())];
        add(&mut form, "tag", &self.tag);
        add(&mut form, "subnet", &self.subnet);
        add(&mut form, "macaddress", &self.macaddress);
        add(&mut form, "device", &self.device);
        add(&mut form, "type", &self.kind);
        form
    }
}

/// Fields for creating or updating a subnet
#[derive(Debug, Clone, Default)]
pub struct SubnetParams {
    pub network: String,
    pub mask_bits: u8,
    pub vrf_group_id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub number: Option<u32>,
    pub gateway: Option<String>,
    pub range_begin: Option<String>,
    pub range_end: Option<String>,
    pub parent_vlan_id: Option<u64>,
    pub customer_id: Option<u64>,
    pub customer: Option<String>,
}

impl SubnetParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("network", &self.network)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("network", self.network.clone()),
            ("mask_bits", self.mask_bits.to_string()),
        ];
        add_num(&mut form, "vrf_group_id", &self.vrf_group_id);
        add(&mut form, "name", &self.name);
        add(&mut form, "description", &self.description);
        add_num(&mut form, "number", &self.number);
        add(&mut form, "gateway", &self.gateway);
        add(&mut form, "range_begin", &self.range_begin);
        add(&mut form, "range_end", &self.range_end);
        add_num(&mut form, "parent_vlan_id", &self.parent_vlan_id);
        add_num(&mut form, "customer_id", &self.customer_id);
        add(&mut form, "customer", &self.customer);
        form
    }
}

/// Fields for creating a VLAN
#[derive(Debug, Clone, Default)]
pub struct VlanParams {
    pub number: u16,
    pub name: Option<String>,
    pub description: Option<String>,
    pub switch_id: Option<u64>,
    pub switches: Option<String>,
    pub notes: Option<String>,
}

impl VlanParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        if self.number == 0 {
            return Err(Device42Error::InvalidRequest(
                "required field \"number\" not set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("number", self.number.to_string())];
        add(&mut form, "name", &self.name);
        add(&mut form, "description", &self.description);
        add_num(&mut form, "switch_id", &self.switch_id);
        add(&mut form, "switches", &self.switches);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Fields for creating or updating a switch port
#[derive(Debug, Clone, Default)]
pub struct SwitchportParams {
    pub port: u32,
    pub switch: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub vlan_ids: Option<String>,
    pub up: Option<bool>,
    pub up_admin: Option<bool>,
    pub count: Option<bool>,
    pub remote_port_id: Option<u64>,
    pub remote_device: Option<String>,
    pub remote_port: Option<String>,
    pub notes: Option<String>,
    pub switchport_id: Option<u64>,
}

impl SwitchportParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        if self.port == 0 {
            return Err(Device42Error::InvalidRequest(
                "required field \"port\" not set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("port", self.port.to_string())];
        add(&mut form, "switch", &self.switch);
        add(&mut form, "description", &self.description);
        add(&mut form, "type", &self.kind);
        add(&mut form, "vlan_ids", &self.vlan_ids);
        add_flag(&mut form, "up", &self.up);
        add_flag(&mut form, "up_admin", &self.up_admin);
        add_flag(&mut form, "count", &self.count);
        add_num(&mut form, "remote_port_id", &self.remote_port_id);
        add(&mut form, "remote_device", &self.remote_device);
        add(&mut form, "remote_port", &self.remote_port);
        add(&mut form, "notes", &self.notes);
        add_num(&mut form, "switchport_id", &self.switchport_id);
        form
    }
}

/// Fields for creating a DNS record.
/// The record's zone must already exist server-side.
#[derive(Debug, Clone, Default)]
pub struct DnsRecordParams {
    pub domain: String,
    /// SOA, NS, MX, A, AAAA, CNAME, PTR, TXT, ...
    pub kind: String,
    pub nameserver: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub prio: Option<u32>,
    pub ttl: Option<u32>,
}

impl DnsRecordParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("domain", &self.domain)?;
        require("type", &self.kind)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("domain", self.domain.clone()),
            ("type", self.kind.clone()),
        ];
        add(&mut form, "nameserver", &self.nameserver);
        add(&mut form, "name", &self.name);
        add(&mut form, "content", &self.content);
        add_num(&mut form, "prio", &self.prio);
        add_num(&mut form, "ttl", &self.ttl);
        form
    }
}

/// Fields for creating or updating a customer
#[derive(Debug, Clone, Default)]
pub struct CustomerParams {
    pub name: String,
    pub contact_info: Option<String>,
    pub notes: Option<String>,
}

impl CustomerParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone())];
        add(&mut form, "contact_info", &self.contact_info);
        add(&mut form, "notes", &self.notes);
        form
    }
}

/// Fields for attaching a contact record to a customer.
/// The contact type must already exist server-side.
#[derive(Debug, Clone, Default)]
pub struct CustomerContactParams {
    pub customer: String,
    pub name: String,
    pub kind: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerContactParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("customer", &self.customer)?;
        require("name", &self.name)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("customer", self.customer.clone()),
            ("name", self.name.clone()),
        ];
        add(&mut form, "type", &self.kind);
        add(&mut form, "email", &self.email);
        add(&mut form, "phone", &self.phone);
        add(&mut form, "address", &self.address);
        form
    }
}

/// Fields for setting a custom key/value pair on a resource
#[derive(Debug, Clone, Default)]
pub struct CustomFieldParams {
    /// Name of the target object
    pub name: String,
    pub key: String,
    /// Default is text; "number" and "date" (yyyy-mm-dd) are accepted
    pub kind: Option<String>,
    pub value: Option<String>,
    pub value2: Option<String>,
    pub notes: Option<String>,
}

impl CustomFieldParams {
    pub(crate) fn validate(&self) -> Result<(), Device42Error> {
        require("name", &self.name)?;
        require("key", &self.key)
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("name", self.name.clone()), ("key", self.key.clone())];
        add(&mut form, "type", &self.kind);
        add(&mut form, "value", &self.value);
        add(&mut form, "value2", &self.value2);
        add(&mut form, "notes", &self.notes);
        form
    }
}

// ====================
// Helpers
// ====================

fn require(field: &str, value: &str) -> Result<(), Device42Error> {
    if value.is_empty() {
        return Err(Device42Error::InvalidRequest(format!(
            "required field \"{field}\" not set"
        )));
    }
    Ok(())
}

fn add(form: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        form.push((key, v.clone()));
    }
}

fn add_num<T: ToString>(form: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<T>) {
    if let Some(v) = value {
        form.push((key, v.to_string()));
    }
}

// The API takes yes/no strings for its boolean fields
fn add_flag(form: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<bool>) {
    if let Some(v) = value {
        form.push((key, yes_no(*v).to_string()));
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Accept a string or a bare number where the API is inconsistent
fn stringly<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Deserialize an array that may contain nulls, dropping them
fn null_filtered<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Vec::<Option<T>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_message_extracts_id_and_applied_flag() {
        let msg: ApiMessage = serde_json::from_value(json!({
            "msg": ["device added or updated", 156, "TestDevice", true, true],
            "code": 0
        }))
        .unwrap();
        assert!(msg.ok());
        assert!(msg.applied());
        assert_eq!(msg.result_id(), Some(156));
        assert_eq!(msg.label(), Some("TestDevice"));
    }

    #[test]
    fn api_message_short_envelope() {
        // Custom-field writes answer a three-element msg
        let msg: ApiMessage = serde_json::from_value(json!({
            "msg": ["custom key pair values added or updated", 15, "Asset with CustomFields - AC"],
            "code": 0
        }))
        .unwrap();
        assert!(msg.applied());
        assert_eq!(msg.result_id(), Some(15));
    }

    #[test]
    fn api_message_error_string() {
        let msg: ApiMessage = serde_json::from_value(json!({
            "msg": "list index out of range",
            "code": 1
        }))
        .unwrap();
        assert!(!msg.ok());
        assert!(!msg.applied());
        assert_eq!(msg.result_id(), None);
        assert_eq!(msg.message_text(), Some("list index out of range"));
    }

    #[test]
    fn slot_orders_fractional_positions() {
        let mut slots = vec![Slot::new(32.0), Slot::new(1.5), Slot::new(6.0), Slot::new(1.0)];
        slots.sort();
        let positions: Vec<f64> = slots.iter().map(|s| s.0).collect();
        assert_eq!(positions, vec![1.0, 1.5, 6.0, 32.0]);
    }

    fn rack_with_devices(numbering: Option<&str>) -> Rack {
        serde_json::from_value(json!({
            "rack_id": 80,
            "name": "TestRack1",
            "size": 42,
            "room": "Test Room",
            "numbering_start_from_bottom": numbering,
            "devices": [
                {"device_id": 3, "name": "c", "start_at": 36.0},
                {"device_id": 1, "name": "a", "start_at": 6.0},
                {"device_id": 2, "name": "b", "start_at": 28.0}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn rack_iterates_ascending_when_numbered_top_down() {
        let rack = rack_with_devices(Some("no"));
        assert!(!rack.numbers_from_bottom());
        let names: Vec<&str> = rack
            .devices_in_order()
            .iter()
            .filter_map(|d| d.name.as_deref())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn rack_iterates_descending_when_numbered_bottom_up() {
        let rack = rack_with_devices(Some("yes"));
        assert!(rack.numbers_from_bottom());
        let names: Vec<&str> = rack
            .devices_in_order()
            .iter()
            .filter_map(|d| d.name.as_deref())
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn rack_defaults_to_bottom_up_numbering() {
        let rack = rack_with_devices(None);
        assert!(rack.numbers_from_bottom());
    }

    #[test]
    fn rack_slot_reload_replaces_occupant() {
        let rack = rack_with_devices(Some("yes"));
        let mut with_dup = rack.clone();
        with_dup.devices.push(RackDevice {
            device_id: Some(9),
            name: Some("replacement".to_string()),
            start_at: Some(6.0),
            size: None,
            depth: None,
            orientation: None,
        });
        let slots = with_dup.device_slots();
        assert_eq!(slots.len(), 3);
        assert_eq!(
            slots.get(&Slot::new(6.0)).and_then(|d| d.name.as_deref()),
            Some("replacement")
        );
    }

    #[test]
    fn device_hw_model_alias_and_null_macs() {
        let device: Device = serde_json::from_value(json!({
            "device_id": 156,
            "name": "TestDevice",
            "hw_model": "Generic Hardware 1U",
            "osver": 6.5,
            "mac_addresses": [null, {"mac": "00:00:00:00:00:02", "port_name": "eth1"}],
            "ip_addresses": [{"ip": "1.1.1.1", "type": "static"}]
        }))
        .unwrap();
        assert_eq!(device.hardware.as_deref(), Some("Generic Hardware 1U"));
        assert_eq!(device.osver.as_deref(), Some("6.5"));
        assert_eq!(device.mac_addresses.len(), 1);
        assert_eq!(device.ip_addresses[0].ipaddress, "1.1.1.1");
        assert_eq!(
            device.sole_mac().map(|m| m.macaddress.as_str()),
            Some("00:00:00:00:00:02")
        );
    }

    #[test]
    fn room_params_need_building_or_building_id() {
        let mut params = RoomParams {
            name: "Test Room".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Device42Error::InvalidRequest(_))
        ));
        params.building_id = Some(3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn patch_panel_port_needs_mac_or_device() {
        let mut params = PatchPanelPortParams {
            patch_panel_id: 2,
            number: 1,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        params.device = Some("Test Device".to_string());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rack_params_encode_numbering_flag_as_yes_no() {
        let params = RackParams {
            name: "TestRack1".to_string(),
            size: 42,
            room: "Test Room".to_string(),
            numbering_start_from_bottom: Some(false),
            ..Default::default()
        };
        let form = params.form();
        assert!(form.contains(&("numbering_start_from_bottom", "no".to_string())));
    }

    #[test]
    fn device_params_require_name() {
        let params = DeviceParams::default();
        assert!(matches!(
            params.validate(),
            Err(Device42Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn pdu_model_display_sums_port_groups() {
        let model: PduModel = serde_json::from_value(json!({
            "pdu_model_id": 1,
            "ports in pdu model": [
                {"pdu_port_count": 8, "pdu_port_type": "NEMA 5-15R"}
            ]
        }))
        .unwrap();
        assert_eq!(model.to_string(), "pdu_model 1 ports 8 type NEMA 5-15R");
    }

    #[test]
    fn history_timestamp_parses_upstream_format() {
        let entry = HistoryEntry {
            action_time: Some("2014-04-04T10:16:46.776Z".to_string()),
            action: Some("Add/Change(API)".to_string()),
            user: Some("admin".to_string()),
            content_type: Some("building".to_string()),
        };
        let ts = entry.timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2014-04-04T10:16:46.776+00:00");
        assert_eq!(
            entry.to_string(),
            "2014-04-04T10:16:46.776Z Add/Change(API) admin building"
        );
    }

    #[test]
    fn customer_contacts_use_upstream_key() {
        let customer: Customer = serde_json::from_value(json!({
            "name": "device42 Support",
            "Contacts": [
                {"phone": "111-111-111", "type": "Helpdesk", "email": "helpdesk@device42.com", "name": "Helpdesk1"}
            ]
        }))
        .unwrap();
        assert_eq!(customer.contacts.len(), 1);
        assert_eq!(customer.contacts[0].name.as_deref(), Some("Helpdesk1"));
    }
}

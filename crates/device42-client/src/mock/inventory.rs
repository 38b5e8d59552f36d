//! Inventory operations for MockDevice42Client
//!
//! Handles devices, hardware models, assets, PDUs and patch panels

use super::{envelope, envelope_short, MockDevice42Client};
use crate::error::Device42Error;
use crate::models::*;

pub async fn create_device(
    client: &MockDevice42Client,
    params: &DeviceParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut devices = client.devices.lock().unwrap();
    let id = devices
        .values()
        .find(|d| d.name == params.name)
        .and_then(|d| d.device_id)
        .unwrap_or_else(|| client.next_id());
    devices.insert(
        id,
        Device {
            device_id: Some(id),
            name: params.name.clone(),
            serial_no: params.serial_no.clone(),
            asset_no: params.asset_no.clone(),
            uuid: params.uuid.clone(),
            kind: params.kind.clone(),
            manufacturer: params.manufacturer.clone(),
            hardware: params.hardware.clone(),
            service_level: params.service_level.clone(),
            in_service: params.in_service,
            is_it_switch: params.is_it_switch,
            is_it_virtual_host: params.is_it_virtual_host,
            is_it_blade_host: params.is_it_blade_host,
            os: params.os.clone(),
            osver: params.osver.clone(),
            memory: params.memory,
            cpucount: params.cpucount,
            cpupower: params.cpupower,
            cpucore: params.cpucore,
            hddcount: params.hddcount,
            hddsize: params.hddsize,
            hddraid: params.hddraid.clone(),
            hddraid_type: params.hddraid_type.clone(),
            customer: params.customer.clone(),
            notes: params.notes.clone(),
            ..Device::default()
        },
    );
    Ok(envelope("device added or updated", id, &params.name))
}

pub async fn get_device(client: &MockDevice42Client, id: u64) -> Result<Device, Device42Error> {
    client
        .devices
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| Device42Error::NotFound(format!("Device {} not found", id)))
}

pub async fn get_device_by_name(
    client: &MockDevice42Client,
    name: &str,
) -> Result<Option<Device>, Device42Error> {
    Ok(client
        .devices
        .lock()
        .unwrap()
        .values()
        .find(|d| d.name == name)
        .cloned())
}

pub async fn get_device_by_serial(
    client: &MockDevice42Client,
    serial: &str,
) -> Result<Option<Device>, Device42Error> {
    Ok(client
        .devices
        .lock()
        .unwrap()
        .values()
        .find(|d| d.serial_no.as_deref() == Some(serial))
        .cloned())
}

pub async fn add_device_mac(
    client: &MockDevice42Client,
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
    super::ipam::create_mac_address(client, &params).await
}

pub async fn add_device_ip(
    client: &MockDevice42Client,
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
    super::ipam::create_ip_address(client, &params).await
}

pub async fn create_hardware(
    client: &MockDevice42Client,
    params: &HardwareParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    client
        .hardware_models
        .lock()
        .unwrap()
        .insert(params.name.clone(), params.clone());
    Ok(envelope("hardware model added or updated", id, &params.name))
}

pub async fn create_asset(
    client: &MockDevice42Client,
    params: &AssetParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    client.assets.lock().unwrap().insert(
        id,
        Asset {
            asset_id: Some(id),
            kind: Some(params.kind.clone()),
            name: params.name.clone(),
            service_level: params.service_level.clone(),
            serial_no: params.serial_no.clone(),
            asset_no: params.asset_no.clone(),
            customer_id: params.customer_id,
            location: params.location.clone(),
            building: params.building.clone(),
            room: params.room.clone(),
            rack: params.rack.clone(),
            rack_id: params.rack_id,
            row: params.row.clone(),
            start_at: params.start_at,
            size: params.size,
            orientation: params.orientation.clone(),
            depth: params.depth.clone(),
            vendor: params.vendor.clone(),
            imagefile_id: params.imagefile_id,
            contract_id: params.contract_id,
            patch_panel_model_id: params.patch_panel_model_id,
            numbering_start_from: params.numbering_start_from.clone(),
            notes: params.notes.clone(),
            custom_fields: vec![],
        },
    );
    Ok(envelope_short("asset added/edited.", id, ""))
}

pub async fn get_asset(client: &MockDevice42Client, id: u64) -> Result<Asset, Device42Error> {
    client
        .assets
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| Device42Error::NotFound(format!("Asset {} not found", id)))
}

pub async fn list_assets(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<Asset>, Device42Error> {
    Ok(client.assets.lock().unwrap().values().cloned().collect())
}

pub async fn find_assets_by_name(
    client: &MockDevice42Client,
    name: &str,
) -> Result<Vec<Asset>, Device42Error> {
    Ok(client
        .assets
        .lock()
        .unwrap()
        .values()
        .filter(|a| a.name.as_deref() == Some(name))
        .cloned()
        .collect())
}

pub async fn list_patch_panels(client: &MockDevice42Client) -> Result<Vec<Asset>, Device42Error> {
    Ok(client
        .assets
        .lock()
        .unwrap()
        .values()
        .filter(|a| a.kind.as_deref() == Some("Patch Panel"))
        .cloned()
        .collect())
}

pub async fn list_patch_panel_models(
    client: &MockDevice42Client,
) -> Result<Vec<PatchPanelModel>, Device42Error> {
    Ok(client.patch_panel_models.lock().unwrap().clone())
}

pub async fn create_patch_panel_port(
    client: &MockDevice42Client,
    params: &PatchPanelPortParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let panel_name = client
        .assets
        .lock()
        .unwrap()
        .get(&params.patch_panel_id)
        .and_then(|a| a.name.clone())
        .unwrap_or_default();
    client
        .patch_panel_ports
        .lock()
        .unwrap()
        .insert((params.patch_panel_id, params.number), params.clone());
    let label = format!("{}: {}", panel_name, params.number);
    Ok(envelope_short("patch port details edited successfully.", 1, label))
}

pub async fn list_pdu_models(client: &MockDevice42Client) -> Result<Vec<PduModel>, Device42Error> {
    Ok(client.pdu_models.lock().unwrap().clone())
}

pub async fn create_pdu(
    client: &MockDevice42Client,
    params: &PduParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = params.pdu_id.unwrap_or_else(|| client.next_id());
    client
        .pdus
        .lock()
        .unwrap()
        .insert(params.name.clone(), params.clone());
    if params.rack_id.is_some() {
        Ok(envelope_short(
            "PDU Rack Info successfully added/edited.",
            id,
            &params.name,
        ))
    } else {
        Ok(envelope("pdu added or updated", id, &params.name))
    }
}
